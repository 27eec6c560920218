//! Activation properties declared on the process element.

use super::ConnectorConfigError;
use crate::agent_registry::domain::{AgentId, parse_skill_list};
use serde::{Deserialize, Serialize};

/// Raw properties bound from the engine's property bag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorProperties {
    agent_id: Option<String>,
    /// Comma-separated skill list.
    skills: Option<String>,
}

/// Properties after validation, ready to build an agent from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedProperties {
    /// Identifier to register the agent under.
    pub agent_id: AgentId,
    /// Parsed skill list.
    pub skills: Vec<String>,
}

impl ConnectorProperties {
    /// Creates properties for the given agent identifier.
    #[must_use]
    pub fn new(agent_id: impl Into<String>) -> Self {
        Self {
            agent_id: Some(agent_id.into()),
            skills: None,
        }
    }

    /// Sets the comma-separated skill list.
    #[must_use]
    pub fn with_skills(mut self, csv: impl Into<String>) -> Self {
        self.skills = Some(csv.into());
        self
    }

    /// Binds properties from an untyped JSON object.
    ///
    /// Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorConfigError::Binding`] when `value` is not an
    /// object or a known key has the wrong type.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConnectorConfigError> {
        serde_json::from_value(value).map_err(|err| ConnectorConfigError::Binding(err.to_string()))
    }

    /// Returns the raw agent identifier, if any.
    #[must_use]
    pub fn agent_id(&self) -> Option<&str> {
        self.agent_id.as_deref()
    }

    /// Returns the raw skill list, if any.
    #[must_use]
    pub fn skills(&self) -> Option<&str> {
        self.skills.as_deref()
    }

    /// Validates the properties.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorConfigError::BlankAgentId`] when `agentId` is
    /// absent or blank.
    pub fn validate(&self) -> Result<ValidatedProperties, ConnectorConfigError> {
        let raw_id = self.agent_id.as_deref().unwrap_or_default();
        let agent_id = AgentId::new(raw_id).map_err(|_| ConnectorConfigError::BlankAgentId)?;
        Ok(ValidatedProperties {
            agent_id,
            skills: parse_skill_list(self.skills.as_deref()),
        })
    }
}
