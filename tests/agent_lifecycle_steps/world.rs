//! Shared world state for agent lifecycle BDD scenarios.

use std::sync::Arc;

use a2a_bridge::agent_registry::{
    adapters::{
        channel::{ChannelCorrelationHandle, CorrelationEvent},
        memory::AgentRegistry,
    },
    domain::Agent,
};
use a2a_bridge::discovery::{
    domain::InvokeResponse,
    services::{DiscoveryResult, DiscoveryService},
};
use a2a_bridge::inbound::{
    adapters::PropertiesActivationContext,
    domain::ConnectorProperties,
    services::{InboundConnector, InboundConnectorResult},
};
use mockable::DefaultClock;
use rstest::fixture;
use tokio::sync::mpsc::UnboundedReceiver;

/// Scenario world for agent lifecycle behaviour tests.
pub struct LifecycleWorld {
    /// Registry shared by the connector and the discovery service.
    pub registry: AgentRegistry,
    /// Discovery surface under test.
    pub service: DiscoveryService,
    /// Connector under test.
    pub connector: InboundConnector<DefaultClock>,
    /// Properties for the next activation.
    pub pending: Option<ConnectorProperties>,
    /// Engine side of the correlation channel for the last activation.
    pub events: Option<UnboundedReceiver<CorrelationEvent>>,
    /// Result of the last activation attempt.
    pub last_activation: Option<InboundConnectorResult<Agent>>,
    /// Result of the last invocation.
    pub last_invocation: Option<DiscoveryResult<InvokeResponse>>,
}

impl LifecycleWorld {
    /// Creates a world with an empty registry and an inactive connector.
    #[must_use]
    pub fn new() -> Self {
        let registry = AgentRegistry::new();
        Self {
            service: DiscoveryService::new(registry.clone()),
            connector: InboundConnector::new(registry.clone(), Arc::new(DefaultClock)),
            registry,
            pending: None,
            events: None,
            last_activation: None,
            last_invocation: None,
        }
    }

    /// Activates the connector with the pending properties.
    ///
    /// # Errors
    ///
    /// Returns an error if no properties are pending or they cannot be
    /// encoded.
    pub fn activate_pending(&mut self) -> Result<(), eyre::Report> {
        let properties = self
            .pending
            .take()
            .ok_or_else(|| eyre::eyre!("no pending connector properties in scenario world"))?;
        let source = properties.agent_id().unwrap_or_default().to_owned();
        let (handle, events) = ChannelCorrelationHandle::channel(source);
        let context = PropertiesActivationContext::from_properties(&properties, Arc::new(handle))
            .map_err(|err| eyre::eyre!("encode connector properties: {err}"))?;
        self.events = Some(events);
        self.last_activation = Some(self.connector.activate(&context));
        Ok(())
    }
}

impl Default for LifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> LifecycleWorld {
    LifecycleWorld::default()
}
