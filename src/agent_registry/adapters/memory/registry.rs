//! Concurrent in-memory agent directory.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::agent_registry::domain::{Agent, AgentId};

/// Thread-safe directory of live agents keyed by [`AgentId`].
///
/// Clones share the same underlying map. Every operation takes the lock
/// exactly once, so each call is atomic on its own and no operation spans
/// another. Callers need no external locking.
#[derive(Debug, Clone, Default)]
pub struct AgentRegistry {
    agents: Arc<RwLock<HashMap<AgentId, Agent>>>,
}

impl AgentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `agent`, replacing any entry with the same identifier.
    ///
    /// Returns the stored agent. Replacement is last-writer-wins with no
    /// merging of skills.
    pub fn register(&self, agent: Agent) -> Agent {
        self.write().insert(agent.id().clone(), agent.clone());
        agent
    }

    /// Looks up an agent by identifier.
    ///
    /// Returns `None` when no agent is registered under `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Agent> {
        self.read().get(id).cloned()
    }

    /// Returns a point-in-time snapshot of all registered agents.
    ///
    /// Ordering is unspecified.
    #[must_use]
    pub fn list(&self) -> Vec<Agent> {
        self.read().values().cloned().collect()
    }

    /// Removes the agent registered under `id`.
    ///
    /// Removing an absent identifier is a no-op and returns `None`.
    pub fn remove(&self, id: &str) -> Option<Agent> {
        self.write().remove(id)
    }

    /// Returns the number of registered agents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns whether no agents are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave the map half-updated since
    // every critical section is a single map call.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<AgentId, Agent>> {
        self.agents.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<AgentId, Agent>> {
        self.agents.write().unwrap_or_else(PoisonError::into_inner)
    }
}
