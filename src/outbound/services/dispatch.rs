//! Service layer for outbound agent calls.

use crate::outbound::{
    domain::{OutboundDomainError, OutboundRequest, OutboundResult, ResponseBody},
    ports::{OutboundTransport, TransportError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for outbound dispatch.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The request could not be turned into a call.
    #[error(transparent)]
    Configuration(#[from] OutboundDomainError),

    /// The HTTP call did not complete.
    #[error(transparent)]
    Network(#[from] TransportError),
}

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Forwards invocations to external agents.
#[derive(Debug)]
pub struct OutboundDispatcher<T>
where
    T: OutboundTransport,
{
    transport: Arc<T>,
}

impl<T> Clone for OutboundDispatcher<T>
where
    T: OutboundTransport,
{
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T> OutboundDispatcher<T>
where
    T: OutboundTransport,
{
    /// Creates a dispatcher sending through `transport`.
    #[must_use]
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Performs one outbound call.
    ///
    /// A body that is not a JSON object is returned wrapped under `raw`
    /// rather than failing the call. The status code is returned as
    /// received.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Configuration`] for an unsupported mode or
    /// unusable base URL, and [`DispatchError::Network`] when the call fails
    /// to complete. Nothing is retried.
    pub async fn execute(&self, request: &OutboundRequest) -> DispatchResult<OutboundResult> {
        let call = request.resolve()?;
        tracing::debug!(mode = %call.mode(), url = call.url(), "dispatching outbound agent call");

        let response = self.transport.post_json(&call).await?;
        let body = ResponseBody::parse(response.body);
        if matches!(body, ResponseBody::Raw(_)) {
            tracing::warn!(
                url = call.url(),
                status = response.status_code,
                "agent replied with a non-JSON body; wrapping as raw text"
            );
        }

        Ok(OutboundResult::new(response.status_code, body))
    }
}
