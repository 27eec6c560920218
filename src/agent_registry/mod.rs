//! Directory of agents that are currently live in the orchestration engine.
//!
//! An agent exists in the registry for exactly as long as the process
//! activation that owns it. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
