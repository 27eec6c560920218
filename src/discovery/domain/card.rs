//! Agent listing entries and discovery cards.

use crate::agent_registry::domain::Agent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Listing entry for one registered agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSummary {
    /// Agent identifier.
    pub id: String,
    /// Declared skills.
    pub skills: Vec<String>,
}

impl From<&Agent> for AgentSummary {
    fn from(agent: &Agent) -> Self {
        Self {
            id: agent.id().to_string(),
            skills: agent.skills().to_vec(),
        }
    }
}

/// Action a discovery client can take on an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardAction {
    /// Action identifier.
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// HTTP method.
    pub method: String,
    /// Path to send the request to.
    pub href: String,
    /// JSON-schema-like description of the request body.
    pub input_schema: Value,
}

impl CardAction {
    /// Builds the invoke action for `agent_id`.
    #[must_use]
    pub fn invoke(agent_id: &str) -> Self {
        Self {
            id: "invoke".to_owned(),
            label: "Invoke Agent".to_owned(),
            method: "POST".to_owned(),
            href: format!("/a2a/agents/{agent_id}/invoke"),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "inputText": {"type": "string", "title": "Instruction / Request"},
                    "intent": {"type": "string", "title": "Intent (optional)"},
                    "parameters": {"type": "object", "title": "Parameters (optional)"}
                }
            }),
        }
    }
}

/// Read-only capability description of an agent.
///
/// Recomputed for every request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCard {
    /// Card identifier, `agent:{id}`.
    pub id: String,
    /// Display title, the agent identifier.
    pub title: String,
    /// Display subtitle.
    pub subtitle: String,
    /// Human-readable skill summary.
    pub description: String,
    /// Declared skills.
    pub skills: Vec<String>,
    /// Actions available on the agent.
    pub actions: Vec<CardAction>,
    /// Rendering hints for clients.
    pub ui_schema: Map<String, Value>,
    /// When the agent was registered.
    pub registered_at: DateTime<Utc>,
}

impl From<&Agent> for AgentCard {
    fn from(agent: &Agent) -> Self {
        let id = agent.id().as_str();
        let mut ui_schema = Map::new();
        ui_schema.insert("icon".to_owned(), json!("sparkles"));
        ui_schema.insert("category".to_owned(), json!("Banking"));

        Self {
            id: format!("agent:{id}"),
            title: id.to_owned(),
            subtitle: "Reusable A2A Agent".to_owned(),
            description: format!("Skills: {}", agent.skills().join(", ")),
            skills: agent.skills().to_vec(),
            actions: vec![CardAction::invoke(id)],
            ui_schema,
            registered_at: agent.registered_at(),
        }
    }
}
