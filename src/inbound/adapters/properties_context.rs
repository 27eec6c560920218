//! Activation context backed by a JSON property bag.

use crate::agent_registry::ports::CorrelationHandle;
use crate::inbound::{
    domain::{ConnectorConfigError, ConnectorProperties},
    ports::ActivationContext,
};
use std::sync::Arc;

/// Activation context holding the engine's untyped property bag.
///
/// Used when activations are replayed from configuration at startup rather
/// than delivered by a running engine.
#[derive(Clone)]
pub struct PropertiesActivationContext {
    properties: serde_json::Value,
    handle: Arc<dyn CorrelationHandle>,
}

impl PropertiesActivationContext {
    /// Creates a context from a raw property bag.
    #[must_use]
    pub fn new(properties: serde_json::Value, handle: Arc<dyn CorrelationHandle>) -> Self {
        Self { properties, handle }
    }

    /// Creates a context from already-typed properties.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorConfigError::Binding`] when the properties cannot
    /// be encoded as JSON.
    pub fn from_properties(
        properties: &ConnectorProperties,
        handle: Arc<dyn CorrelationHandle>,
    ) -> Result<Self, ConnectorConfigError> {
        let value = serde_json::to_value(properties)
            .map_err(|err| ConnectorConfigError::Binding(err.to_string()))?;
        Ok(Self::new(value, handle))
    }
}

impl ActivationContext for PropertiesActivationContext {
    fn bind_properties(&self) -> Result<ConnectorProperties, ConnectorConfigError> {
        ConnectorProperties::from_value(self.properties.clone())
    }

    fn correlation_handle(&self) -> Arc<dyn CorrelationHandle> {
        Arc::clone(&self.handle)
    }
}
