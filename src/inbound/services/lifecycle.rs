//! Activation lifecycle of the inbound connector.
//!
//! Provides [`InboundConnector`], which moves between
//! [`ConnectorState::Inactive`] and [`ConnectorState::Active`] as the owning
//! process is activated and deactivated by the orchestration engine.

use crate::agent_registry::{
    adapters::memory::AgentRegistry,
    domain::{Agent, AgentId},
    ports::{CorrelationError, CorrelationHandle, Variables},
};
use crate::inbound::{
    domain::{ConnectorConfigError, ConnectorState},
    ports::ActivationContext,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by inbound connector operations.
#[derive(Debug, Error)]
pub enum InboundConnectorError {
    /// Activation properties were missing or invalid.
    #[error(transparent)]
    Configuration(#[from] ConnectorConfigError),

    /// The owning engine refused the event.
    #[error(transparent)]
    Correlation(#[from] CorrelationError),

    /// An event arrived while no agent was activated.
    #[error("inbound connector is not active")]
    NotActive,
}

/// Result type for inbound connector operations.
pub type InboundConnectorResult<T> = Result<T, InboundConnectorError>;

struct ActiveBinding {
    agent_id: AgentId,
    handle: Arc<dyn CorrelationHandle>,
}

/// Connector that keeps one agent registered for one process activation.
pub struct InboundConnector<C>
where
    C: Clock + Send + Sync,
{
    registry: AgentRegistry,
    clock: Arc<C>,
    binding: Option<ActiveBinding>,
}

impl<C> InboundConnector<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an inactive connector writing into `registry`.
    #[must_use]
    pub const fn new(registry: AgentRegistry, clock: Arc<C>) -> Self {
        Self {
            registry,
            clock,
            binding: None,
        }
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> ConnectorState {
        if self.binding.is_some() {
            ConnectorState::Active
        } else {
            ConnectorState::Inactive
        }
    }

    /// Returns the identifier of the activated agent, if any.
    #[must_use]
    pub fn agent_id(&self) -> Option<&AgentId> {
        self.binding.as_ref().map(|binding| &binding.agent_id)
    }

    /// Activates the connector and registers its agent.
    ///
    /// Properties are bound and validated before anything is written, so a
    /// failed activation never leaves an agent in the registry. Activating an
    /// already active connector first removes the previously registered
    /// agent.
    ///
    /// # Errors
    ///
    /// Returns [`InboundConnectorError::Configuration`] when the properties
    /// cannot be bound or `agentId` is blank.
    pub fn activate(&mut self, context: &impl ActivationContext) -> InboundConnectorResult<Agent> {
        let properties = context.bind_properties()?.validate()?;
        let handle = context.correlation_handle();

        self.deactivate();

        let agent = Agent::new(
            properties.agent_id.clone(),
            properties.skills,
            Arc::clone(&handle),
            &*self.clock,
        );
        let stored = self.registry.register(agent);
        tracing::info!(
            agent_id = %stored.id(),
            skills = stored.skills().len(),
            "registered agent via inbound connector"
        );

        self.binding = Some(ActiveBinding {
            agent_id: properties.agent_id,
            handle,
        });
        Ok(stored)
    }

    /// Deactivates the connector and removes its agent.
    ///
    /// A no-op when the connector was never activated or activation failed.
    pub fn deactivate(&mut self) {
        if let Some(binding) = self.binding.take() {
            self.registry.remove(binding.agent_id.as_str());
            tracing::info!(
                agent_id = %binding.agent_id,
                "deactivated inbound connector; agent removed"
            );
        }
    }

    /// Forwards `variables` to the owning process.
    ///
    /// The event is handed to the engine without waiting for the process to
    /// react. Failures are not retried.
    ///
    /// # Errors
    ///
    /// Returns [`InboundConnectorError::NotActive`] when the connector is
    /// inactive, or [`InboundConnectorError::Correlation`] when the engine
    /// refuses the event.
    pub fn on_event(&self, variables: Variables) -> InboundConnectorResult<()> {
        let binding = self
            .binding
            .as_ref()
            .ok_or(InboundConnectorError::NotActive)?;
        binding.handle.notify(variables)?;
        Ok(())
    }
}
