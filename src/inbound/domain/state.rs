//! Connector lifecycle state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of an inbound connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorState {
    /// No agent is registered on behalf of this connector.
    #[default]
    Inactive,
    /// The connector's agent is registered and accepting events.
    Active,
}

impl ConnectorState {
    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inactive => "inactive",
            Self::Active => "active",
        }
    }
}

impl fmt::Display for ConnectorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
