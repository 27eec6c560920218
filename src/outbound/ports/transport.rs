//! HTTP transport port used to reach external agents.

use crate::outbound::domain::OutboundCall;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Status code and undecoded body of an HTTP reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status_code: u16,
    /// Body as text.
    pub body: String,
}

/// Performs one JSON POST per call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OutboundTransport: Send + Sync {
    /// Posts the call's body to its URL with `Content-Type: application/json`
    /// and the call's extra headers.
    ///
    /// Any HTTP status is a successful transport outcome.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] when the call could not complete,
    /// including when it exceeds the adapter's timeout.
    async fn post_json(&self, call: &OutboundCall) -> TransportResult<TransportResponse>;
}

/// Errors returned by transport adapters.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// Connection, timeout or other transport-level failure.
    #[error("HTTP call failed: {0}")]
    Network(Arc<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Wraps a transport-level failure.
    pub fn network(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Network(Arc::new(err))
    }
}
