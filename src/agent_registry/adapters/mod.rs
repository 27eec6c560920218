//! Adapter implementations for the agent registry.

pub mod channel;
pub mod memory;
