//! Static service descriptor.

use serde::{Deserialize, Serialize};

const SERVICE_NAME: &str = "io.example.a2a";
const SERVICE_VERSION: &str = "1.0.0";

/// Service descriptor returned by the manifest endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceManifest {
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
    /// Endpoint templates.
    pub endpoints: ManifestEndpoints,
}

/// Endpoint templates advertised by the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEndpoints {
    /// Agent listing endpoint.
    pub list_agents: String,
    /// Card endpoint template.
    pub card: String,
    /// Invoke endpoint template.
    pub invoke: String,
}

impl Default for ServiceManifest {
    fn default() -> Self {
        Self {
            service: SERVICE_NAME.to_owned(),
            version: SERVICE_VERSION.to_owned(),
            endpoints: ManifestEndpoints {
                list_agents: "/a2a/agents".to_owned(),
                card: "/a2a/agents/{id}/card".to_owned(),
                invoke: "/a2a/agents/{id}/invoke".to_owned(),
            },
        }
    }
}
