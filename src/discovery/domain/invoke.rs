//! Invocation request and response bodies.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Skill reported when an agent declares none.
pub const DEFAULT_SKILL: &str = "default";

/// Steps reported for every successful invocation.
pub const INVOKE_TRACE: [&str; 3] = ["select-agent", "plan", "execute"];

const HANDOFF_REASON: &str = "Invocation failed";

/// Body of an invoke call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeRequest {
    /// Free-text instruction.
    #[serde(default)]
    pub input_text: Option<String>,
    /// Optional structured intent.
    #[serde(default)]
    pub intent: Option<String>,
    /// Optional named parameters.
    #[serde(default)]
    pub parameters: Option<Map<String, Value>>,
}

/// Outcome of an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvokeStatus {
    /// The agent accepted the invocation.
    Ok,
    /// The invocation failed.
    Error,
}

/// Response body of an invoke call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeResponse {
    /// Outcome.
    pub status: InvokeStatus,
    /// Human-readable message.
    pub message: String,
    /// Structured result.
    pub result: Map<String, Value>,
    /// Ordered trace of the steps taken.
    pub actions_taken: Vec<String>,
    /// Whether a human needs to take over.
    pub handoff_required: bool,
    /// Why a handoff is needed.
    pub handoff_reason: Option<String>,
}

impl InvokeResponse {
    /// Builds a successful response.
    #[must_use]
    pub fn ok<'a>(
        message: impl Into<String>,
        result: Map<String, Value>,
        steps: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            status: InvokeStatus::Ok,
            message: message.into(),
            result,
            actions_taken: steps.into_iter().map(str::to_owned).collect(),
            handoff_required: false,
            handoff_reason: None,
        }
    }

    /// Builds a failed response that asks for a handoff.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: InvokeStatus::Error,
            message: message.into(),
            result: Map::new(),
            actions_taken: Vec::new(),
            handoff_required: true,
            handoff_reason: Some(HANDOFF_REASON.to_owned()),
        }
    }
}

/// Picks the skill reported for an invocation.
///
/// An intent matching a declared skill case-insensitively selects that
/// skill in its declared spelling. Otherwise the first declared skill is
/// used, or [`DEFAULT_SKILL`] when there are none. The choice is advisory
/// and never gates the invocation.
#[must_use]
pub fn select_skill<'a>(skills: &'a [String], intent: Option<&str>) -> &'a str {
    let matched = intent.and_then(|wanted| {
        let needle = wanted.to_lowercase();
        skills.iter().find(|skill| skill.to_lowercase() == needle)
    });
    matched
        .or_else(|| skills.first())
        .map_or(DEFAULT_SKILL, String::as_str)
}
