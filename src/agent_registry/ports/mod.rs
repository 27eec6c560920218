//! Port contracts for the agent registry.
//!
//! The registry and its callers depend on the orchestration engine only
//! through [`CorrelationHandle`].

mod correlation;

#[cfg(test)]
pub use correlation::MockCorrelationHandle;
pub use correlation::{CorrelationError, CorrelationHandle, CorrelationResult, Variables};
