//! Registered agent value object.

use super::AgentId;
use crate::agent_registry::ports::{CorrelationHandle, CorrelationResult, Variables};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::fmt;
use std::sync::Arc;

/// An agent registered by an active process.
///
/// Cloning an agent is cheap and shares the correlation handle, so a clone
/// taken out of the registry can still notify the owning process after the
/// registry entry has been replaced or removed.
#[derive(Clone)]
pub struct Agent {
    id: AgentId,
    skills: Vec<String>,
    registered_at: DateTime<Utc>,
    handle: Arc<dyn CorrelationHandle>,
}

impl Agent {
    /// Creates an agent bound to the given correlation handle.
    #[must_use]
    pub fn new(
        id: AgentId,
        skills: impl IntoIterator<Item = String>,
        handle: Arc<dyn CorrelationHandle>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id,
            skills: skills.into_iter().collect(),
            registered_at: clock.utc(),
            handle,
        }
    }

    /// Returns the agent identifier.
    #[must_use]
    pub const fn id(&self) -> &AgentId {
        &self.id
    }

    /// Returns the declared skills in declaration order.
    #[must_use]
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Returns the time the agent was constructed for registration.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Notifies the owning process of an inbound event.
    ///
    /// This is a one-way send: the caller learns only whether the engine
    /// accepted the event, never a reply to it.
    ///
    /// # Errors
    ///
    /// Returns the correlation handle's error unchanged.
    pub fn on_event(&self, variables: Variables) -> CorrelationResult<()> {
        self.handle.notify(variables)
    }
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("id", &self.id)
            .field("skills", &self.skills)
            .field("registered_at", &self.registered_at)
            .finish_non_exhaustive()
    }
}
