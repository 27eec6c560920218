//! Configuration errors raised while binding connector properties.

use thiserror::Error;

/// Errors returned while binding or validating activation properties.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConnectorConfigError {
    /// The engine-supplied property bag could not be bound.
    #[error("invalid connector properties: {0}")]
    Binding(String),

    /// `agentId` is absent or blank.
    #[error("connector property 'agentId' must not be blank")]
    BlankAgentId,
}
