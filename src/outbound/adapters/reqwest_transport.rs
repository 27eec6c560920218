//! `reqwest`-backed outbound transport.

use crate::outbound::{
    domain::OutboundCall,
    ports::{OutboundTransport, TransportError, TransportResponse, TransportResult},
};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use std::time::Duration;

/// HTTP transport with bounded connect and total-call timeouts.
///
/// Calls are never retried and an in-flight call is not cancelled by the
/// caller; it ends on completion or timeout.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Default time allowed to establish a connection.
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Default time allowed for the whole call.
    pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

    /// Creates a transport with the given timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] when the HTTP client cannot be
    /// initialised.
    pub fn new(connect_timeout: Duration, request_timeout: Duration) -> TransportResult<Self> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(TransportError::network)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl OutboundTransport for ReqwestTransport {
    async fn post_json(&self, call: &OutboundCall) -> TransportResult<TransportResponse> {
        let response = self
            .client
            .post(call.url())
            .headers(build_headers(call.headers()))
            .json(call.body())
            .send()
            .await
            .map_err(TransportError::network)?;

        let status_code = response.status().as_u16();
        let body = response.text().await.map_err(TransportError::network)?;
        Ok(TransportResponse { status_code, body })
    }
}

// Caller-supplied headers replace the default content type when they name it.
fn build_headers(extra: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    for (name, value) in extra {
        headers.insert(name.clone(), value.clone());
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderName;
    use rstest::rstest;

    fn extra(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        pairs
            .iter()
            .map(|&(name, value)| {
                (
                    HeaderName::from_static(name),
                    HeaderValue::from_static(value),
                )
            })
            .collect()
    }

    #[rstest]
    fn default_headers_declare_json() {
        let headers = build_headers(&HeaderMap::new());

        assert_eq!(
            headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    #[rstest]
    fn extra_headers_are_merged() {
        let headers = build_headers(&extra(&[
            ("authorization", "Bearer token"),
            ("x-trace", "42"),
        ]));

        assert_eq!(headers.len(), 3);
        assert_eq!(
            headers.get("x-trace").and_then(|v| v.to_str().ok()),
            Some("42")
        );
    }

    #[rstest]
    fn caller_content_type_wins() {
        let headers = build_headers(&extra(&[("content-type", "application/vnd.a2a+json")]));

        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("application/vnd.a2a+json")
        );
    }
}
