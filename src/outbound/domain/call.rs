//! Fully resolved outbound HTTP call.

use super::DispatchMode;
use http::HeaderMap;
use serde_json::Value;

/// An outbound call with its URL and body already decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundCall {
    mode: DispatchMode,
    url: String,
    headers: HeaderMap,
    body: Value,
}

impl OutboundCall {
    /// Creates a resolved call.
    #[must_use]
    pub const fn new(
        mode: DispatchMode,
        url: String,
        headers: HeaderMap,
        body: Value,
    ) -> Self {
        Self {
            mode,
            url,
            headers,
            body,
        }
    }

    /// Returns the mode the call was resolved for.
    #[must_use]
    pub const fn mode(&self) -> DispatchMode {
        self.mode
    }

    /// Returns the target URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the validated caller-supplied headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the JSON body.
    #[must_use]
    pub const fn body(&self) -> &Value {
        &self.body
    }
}
