//! Shared helpers for in-memory integration tests.

use a2a_bridge::agent_registry::adapters::{
    channel::{ChannelCorrelationHandle, CorrelationEvent},
    memory::AgentRegistry,
};
use a2a_bridge::discovery::services::DiscoveryService;
use a2a_bridge::inbound::{
    adapters::PropertiesActivationContext, domain::ConnectorProperties,
    services::InboundConnector,
};
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

/// Provides a fresh registry for each test.
#[fixture]
pub fn registry() -> AgentRegistry {
    AgentRegistry::new()
}

/// An activated connector and the engine side of its correlation channel.
pub struct ActiveAgent {
    /// The activated connector.
    pub connector: InboundConnector<DefaultClock>,
    /// Events raised for the owning process.
    pub events: UnboundedReceiver<CorrelationEvent>,
}

/// Activates a connector for `agent_id` with a comma-separated skill list.
///
/// # Panics
///
/// Panics if activation fails.
pub fn activate(registry: &AgentRegistry, agent_id: &str, skills: &str) -> ActiveAgent {
    let (handle, events) = ChannelCorrelationHandle::channel(agent_id);
    let properties = ConnectorProperties::new(agent_id).with_skills(skills);
    let context = PropertiesActivationContext::from_properties(&properties, Arc::new(handle))
        .expect("properties should encode");
    let mut connector = InboundConnector::new(registry.clone(), Arc::new(DefaultClock));
    connector
        .activate(&context)
        .expect("activation should succeed");
    ActiveAgent { connector, events }
}

/// Builds a discovery service over `registry`.
#[must_use]
pub fn discovery(registry: &AgentRegistry) -> DiscoveryService {
    DiscoveryService::new(registry.clone())
}
