//! Inbound lifecycle connector.
//!
//! The orchestration engine activates one connector per process that
//! declares an agent. Activation registers the agent in the shared
//! [`AgentRegistry`](crate::agent_registry::adapters::memory::AgentRegistry);
//! deactivation removes it again.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
