//! Activation context supplied by the orchestration engine.

use crate::agent_registry::ports::CorrelationHandle;
use crate::inbound::domain::{ConnectorConfigError, ConnectorProperties};
use std::sync::Arc;

/// Engine-side view of one process activation.
pub trait ActivationContext: Send + Sync {
    /// Binds the connector properties declared on the process element.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorConfigError::Binding`] when the declared
    /// properties cannot be bound.
    fn bind_properties(&self) -> Result<ConnectorProperties, ConnectorConfigError>;

    /// Returns the handle that advances the activated process.
    fn correlation_handle(&self) -> Arc<dyn CorrelationHandle>;
}
