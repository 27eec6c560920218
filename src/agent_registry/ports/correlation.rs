//! Correlation port used to advance the process that owns an agent.

use thiserror::Error;

/// Variable set delivered to the owning process.
pub type Variables = serde_json::Map<String, serde_json::Value>;

/// Result type for correlation operations.
pub type CorrelationResult<T> = Result<T, CorrelationError>;

/// Capability to notify the owning process instance of an event.
///
/// Notification is fire-and-forget. An `Ok` return means the engine
/// accepted the event for delivery, not that the process has reacted to it.
#[cfg_attr(test, mockall::automock)]
pub trait CorrelationHandle: Send + Sync {
    /// Delivers `variables` to the owning process.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelationError`] when the engine refuses or can no longer
    /// receive the event. Callers must not retry on behalf of the engine.
    fn notify(&self, variables: Variables) -> CorrelationResult<()>;
}

/// Errors returned by correlation handle implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CorrelationError {
    /// The engine side of the handle has shut down.
    #[error("orchestration engine is no longer accepting events")]
    Closed,

    /// The engine rejected the event.
    #[error("correlation rejected by orchestration engine: {0}")]
    Rejected(String),
}
