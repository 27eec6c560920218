//! Normalised reply from an external agent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reply body as received from the agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    /// The body was a JSON object.
    Json(Map<String, Value>),
    /// The body was anything else and is kept as text.
    Raw(String),
}

impl ResponseBody {
    /// Classifies a raw response body.
    ///
    /// Only a JSON object counts as structured. Arrays, scalars and
    /// malformed JSON are kept as text.
    #[must_use]
    pub fn parse(text: String) -> Self {
        match serde_json::from_str::<Map<String, Value>>(&text) {
            Ok(map) => Self::Json(map),
            Err(_) => Self::Raw(text),
        }
    }

    /// Returns the body as a mapping, wrapping raw text under `raw`.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        match self {
            Self::Json(map) => map,
            Self::Raw(text) => {
                let mut wrapped = Map::new();
                wrapped.insert("raw".to_owned(), Value::String(text));
                wrapped
            }
        }
    }
}

/// Status code and body of an outbound call.
///
/// The status code is passed through untouched; deciding whether it means
/// success is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundResult {
    /// HTTP status code returned by the agent.
    pub status_code: u16,
    /// Parsed body, or `{"raw": text}` for a non-JSON body.
    pub body: Map<String, Value>,
}

impl OutboundResult {
    /// Creates a result from a status code and classified body.
    #[must_use]
    pub fn new(status_code: u16, body: ResponseBody) -> Self {
        Self {
            status_code,
            body: body.into_map(),
        }
    }
}
