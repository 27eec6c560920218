//! Discovery and invocation surface for registered agents.
//!
//! External callers list agents, fetch an agent's card, and invoke it. An
//! invocation raises a correlation event against the agent's owning
//! process. The HTTP binding lives in [`adapters::http`].

pub mod adapters;
pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
