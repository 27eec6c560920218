//! Outbound request as bound from the engine's task variables.

use super::{DispatchMode, OutboundCall, OutboundDomainError};
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Path appended to the base URL in REST mode.
pub const REST_HANDLE_PATH: &str = "/agents/card/handle";

/// Text sent in A2A mode when neither a payload nor input text is given.
pub const A2A_FALLBACK_TEXT: &str = "Help with card management.";

/// One turn of chat history, such as `{"role": "user", "content": "..."}`.
pub type ChatTurn = BTreeMap<String, String>;

/// Request to call an external agent.
///
/// Which fields are read depends on the mode: REST uses `intent`,
/// `parameters`, `input_text` and `chat_history`; A2A uses `a2a_payload`
/// and falls back to `input_text`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundRequest {
    base_url: String,
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    intent: Option<String>,
    #[serde(default)]
    parameters: Option<Map<String, Value>>,
    #[serde(default)]
    input_text: Option<String>,
    #[serde(default)]
    chat_history: Option<Vec<ChatTurn>>,
    #[serde(default)]
    a2a_payload: Option<Map<String, Value>>,
    #[serde(default)]
    headers: Option<BTreeMap<String, String>>,
}

#[derive(Serialize)]
struct RestPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    intent: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<&'a Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chat_history: Option<&'a [ChatTurn]>,
}

impl OutboundRequest {
    /// Creates a REST-mode request for `base_url` with no payload fields.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Binds a request from the engine's task variables.
    ///
    /// # Errors
    ///
    /// Returns [`OutboundDomainError::Binding`] when `baseUrl` is missing or
    /// a field has the wrong type.
    pub fn from_variables(variables: Value) -> Result<Self, OutboundDomainError> {
        serde_json::from_value(variables)
            .map_err(|err| OutboundDomainError::Binding(err.to_string()))
    }

    /// Sets the raw mode string.
    #[must_use]
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Sets the structured intent.
    #[must_use]
    pub fn with_intent(mut self, intent: impl Into<String>) -> Self {
        self.intent = Some(intent.into());
        self
    }

    /// Sets named parameters.
    #[must_use]
    pub fn with_parameters(mut self, parameters: Map<String, Value>) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Sets the free-text input.
    #[must_use]
    pub fn with_input_text(mut self, input_text: impl Into<String>) -> Self {
        self.input_text = Some(input_text.into());
        self
    }

    /// Sets the chat history.
    #[must_use]
    pub fn with_chat_history(mut self, turns: impl IntoIterator<Item = ChatTurn>) -> Self {
        self.chat_history = Some(turns.into_iter().collect());
        self
    }

    /// Sets the raw A2A payload.
    #[must_use]
    pub fn with_a2a_payload(mut self, payload: Map<String, Value>) -> Self {
        self.a2a_payload = Some(payload);
        self
    }

    /// Adds an extra HTTP header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Resolves the mode and builds the call to perform.
    ///
    /// # Errors
    ///
    /// Returns [`OutboundDomainError::UnsupportedMode`] for an unknown mode,
    /// [`OutboundDomainError::EmptyBaseUrl`] or
    /// [`OutboundDomainError::InvalidBaseUrl`] when the base URL is unusable,
    /// and [`OutboundDomainError::InvalidHeader`] when an extra header is not
    /// valid HTTP.
    pub fn resolve(&self) -> Result<OutboundCall, OutboundDomainError> {
        let mode = DispatchMode::parse(self.mode.as_deref())?;
        let base_url = self.validated_base_url()?;
        let headers = self.validated_headers()?;

        let (url, body) = match mode {
            DispatchMode::Rest => {
                let trimmed = base_url.strip_suffix('/').unwrap_or(base_url);
                (format!("{trimmed}{REST_HANDLE_PATH}"), self.rest_body()?)
            }
            DispatchMode::A2a => (base_url.to_owned(), self.a2a_body()),
        };

        Ok(OutboundCall::new(mode, url, headers, body))
    }

    fn validated_headers(&self) -> Result<HeaderMap, OutboundDomainError> {
        let mut headers = HeaderMap::new();
        for (name, value) in self.headers.iter().flatten() {
            let invalid = |reason: String| OutboundDomainError::InvalidHeader {
                name: name.clone(),
                reason,
            };
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|err| invalid(err.to_string()))?;
            let header_value =
                HeaderValue::from_str(value).map_err(|err| invalid(err.to_string()))?;
            headers.insert(header_name, header_value);
        }
        Ok(headers)
    }

    fn validated_base_url(&self) -> Result<&str, OutboundDomainError> {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            return Err(OutboundDomainError::EmptyBaseUrl);
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(OutboundDomainError::InvalidBaseUrl(base_url.to_owned()));
        }
        Ok(base_url)
    }

    fn rest_body(&self) -> Result<Value, OutboundDomainError> {
        let payload = RestPayload {
            intent: self.intent.as_deref(),
            parameters: self.parameters.as_ref(),
            input_text: self.input_text.as_deref(),
            chat_history: self.chat_history.as_deref(),
        };
        serde_json::to_value(payload).map_err(|err| OutboundDomainError::Encoding(err.to_string()))
    }

    fn a2a_body(&self) -> Value {
        if let Some(payload) = self.a2a_payload.as_ref().filter(|payload| !payload.is_empty()) {
            return Value::Object(payload.clone());
        }

        let text = self.input_text.as_deref().unwrap_or(A2A_FALLBACK_TEXT);
        let mut fallback = Map::new();
        fallback.insert("text".to_owned(), Value::String(text.to_owned()));
        Value::Object(fallback)
    }
}
