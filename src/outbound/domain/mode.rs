//! Wire protocol selector.

use super::OutboundDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire protocol used to reach an external agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DispatchMode {
    /// REST-shaped JSON body posted to the agent's card handler.
    #[default]
    #[serde(rename = "REST")]
    Rest,
    /// Raw agent-to-agent JSON posted to the base URL as given.
    #[serde(rename = "A2A")]
    A2a,
}

impl DispatchMode {
    /// Resolves a raw mode string.
    ///
    /// Matching ignores case and surrounding whitespace. `None` and blank
    /// strings resolve to [`DispatchMode::Rest`].
    ///
    /// # Errors
    ///
    /// Returns [`OutboundDomainError::UnsupportedMode`] for any other value.
    pub fn parse(raw: Option<&str>) -> Result<Self, OutboundDomainError> {
        let normalized = raw.map(str::trim).unwrap_or_default().to_uppercase();
        match normalized.as_str() {
            "" | "REST" => Ok(Self::Rest),
            "A2A" => Ok(Self::A2a),
            _ => Err(OutboundDomainError::UnsupportedMode(normalized)),
        }
    }

    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rest => "REST",
            Self::A2a => "A2A",
        }
    }
}

impl fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
