//! Service layer behind the discovery endpoints.
//!
//! Provides [`DiscoveryService`], which reads the shared registry and raises
//! correlation events for invocations.

use crate::agent_registry::{
    adapters::memory::AgentRegistry,
    domain::Agent,
    ports::{CorrelationError, Variables},
};
use crate::discovery::domain::{
    AgentCard, AgentSummary, INVOKE_TRACE, InvokeRequest, InvokeResponse, ServiceManifest,
    select_skill,
};
use serde_json::{Map, Value, json};
use thiserror::Error;

/// Service-level errors for discovery operations.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// No agent is registered under the requested identifier.
    #[error("unknown agent: {0}")]
    NotFound(String),

    /// The owning process refused the invocation event.
    #[error(transparent)]
    Correlation(#[from] CorrelationError),
}

/// Result type for discovery service operations.
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;

/// Discovery and invocation over the shared agent registry.
#[derive(Debug, Clone)]
pub struct DiscoveryService {
    registry: AgentRegistry,
    manifest: ServiceManifest,
}

impl DiscoveryService {
    /// Creates a service reading from `registry`.
    #[must_use]
    pub fn new(registry: AgentRegistry) -> Self {
        Self {
            registry,
            manifest: ServiceManifest::default(),
        }
    }

    /// Returns the static service descriptor.
    #[must_use]
    pub fn manifest(&self) -> ServiceManifest {
        self.manifest.clone()
    }

    /// Lists every registered agent with its skills.
    #[must_use]
    pub fn list_agents(&self) -> Vec<AgentSummary> {
        self.registry.list().iter().map(AgentSummary::from).collect()
    }

    /// Builds the card for one agent.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::NotFound`] when no agent has the given
    /// identifier.
    pub fn card(&self, id: &str) -> DiscoveryResult<AgentCard> {
        let agent = self.find_agent_or_error(id)?;
        Ok(AgentCard::from(&agent))
    }

    /// Invokes an agent and advances its owning process.
    ///
    /// The agent is cloned out of the registry before notifying, so a
    /// concurrent deactivation between lookup and notification still
    /// delivers this one event through the handle it held. That race is
    /// accepted rather than serialised against unrelated registry calls.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::NotFound`] when no agent has the given
    /// identifier, or [`DiscoveryError::Correlation`] when the owning
    /// process refuses the event.
    pub fn invoke(&self, id: &str, request: InvokeRequest) -> DiscoveryResult<InvokeResponse> {
        let agent = self.find_agent_or_error(id)?;
        let skill = select_skill(agent.skills(), request.intent.as_deref());
        tracing::debug!(agent_id = %agent.id(), skill, "selected skill for invocation");

        let InvokeRequest {
            input_text,
            intent,
            parameters,
        } = request;

        let mut variables = Variables::new();
        variables.insert("userRequest".to_owned(), json!(input_text));
        agent.on_event(variables)?;

        let mut result = Map::new();
        result.insert("agent".to_owned(), json!(agent.id()));
        result.insert("skillsUsed".to_owned(), json!(skill));
        result.insert(
            "echo".to_owned(),
            json!({
                "inputText": input_text,
                "intent": intent,
                "parameters": Value::Object(parameters.unwrap_or_default()),
            }),
        );

        Ok(InvokeResponse::ok(
            format!("Agent {} executed.", agent.id()),
            result,
            INVOKE_TRACE,
        ))
    }

    fn find_agent_or_error(&self, id: &str) -> DiscoveryResult<Agent> {
        self.registry
            .get(id)
            .ok_or_else(|| DiscoveryError::NotFound(id.to_owned()))
    }
}
