//! Outbound dispatch to externally hosted agents.
//!
//! The orchestration engine hands an [`OutboundRequest`](domain::OutboundRequest)
//! to the [`OutboundDispatcher`](services::OutboundDispatcher), which
//! resolves the protocol mode once, performs a single HTTP POST and
//! normalises the reply. This path does not touch the agent registry.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
