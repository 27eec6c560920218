//! Process configuration read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `A2A_BRIDGE_BIND_ADDR` | `0.0.0.0:8080` |
//! | `A2A_BRIDGE_CONNECT_TIMEOUT_MS` | `5000` |
//! | `A2A_BRIDGE_REQUEST_TIMEOUT_MS` | `15000` |
//! | `A2A_BRIDGE_AGENTS` | none |
//!
//! `A2A_BRIDGE_AGENTS` lists agents to activate at startup, for example
//! `card-agent=freeze,unfreeze;faq-agent`. Empty values count as unset.

use crate::inbound::domain::ConnectorProperties;
use crate::outbound::adapters::ReqwestTransport;
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Listen address variable.
pub const BIND_ADDR_VAR: &str = "A2A_BRIDGE_BIND_ADDR";
/// Outbound connect timeout variable, in milliseconds.
pub const CONNECT_TIMEOUT_VAR: &str = "A2A_BRIDGE_CONNECT_TIMEOUT_MS";
/// Outbound request timeout variable, in milliseconds.
pub const REQUEST_TIMEOUT_VAR: &str = "A2A_BRIDGE_REQUEST_TIMEOUT_MS";
/// Startup agent list variable.
pub const AGENTS_VAR: &str = "A2A_BRIDGE_AGENTS";

const DEFAULT_PORT: u16 = 8080;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set to a value that cannot be used.
    #[error("invalid value for {variable}: '{value}'")]
    InvalidValue {
        /// Name of the offending variable.
        variable: &'static str,
        /// The rejected value or list entry.
        value: String,
    },
}

/// Bridge process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    bind_addr: SocketAddr,
    connect_timeout: Duration,
    request_timeout: Duration,
    agents: Vec<ConnectorProperties>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            connect_timeout: ReqwestTransport::DEFAULT_CONNECT_TIMEOUT,
            request_timeout: ReqwestTransport::DEFAULT_REQUEST_TIMEOUT,
            agents: Vec::new(),
        }
    }
}

impl BridgeConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let bind_addr = read(BIND_ADDR_VAR)
            .map(|raw| parse_value(BIND_ADDR_VAR, &raw))
            .transpose()?
            .unwrap_or(defaults.bind_addr);
        let connect_timeout = read(CONNECT_TIMEOUT_VAR)
            .map(|raw| parse_value(CONNECT_TIMEOUT_VAR, &raw).map(Duration::from_millis))
            .transpose()?
            .unwrap_or(defaults.connect_timeout);
        let request_timeout = read(REQUEST_TIMEOUT_VAR)
            .map(|raw| parse_value(REQUEST_TIMEOUT_VAR, &raw).map(Duration::from_millis))
            .transpose()?
            .unwrap_or(defaults.request_timeout);
        let agents = read(AGENTS_VAR)
            .map(|raw| parse_agents(&raw))
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            bind_addr,
            connect_timeout,
            request_timeout,
            agents,
        })
    }

    /// Returns the HTTP listen address.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Returns the outbound connect timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns the outbound total-call timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the agents to activate at startup.
    #[must_use]
    pub fn agents(&self) -> &[ConnectorProperties] {
        &self.agents
    }
}

fn parse_value<T: FromStr>(variable: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            variable,
            value: raw.to_owned(),
        })
}

/// Parses `id=skill,skill;id` into connector properties.
fn parse_agents(raw: &str) -> Result<Vec<ConnectorProperties>, ConfigError> {
    raw.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (id, skills) = entry.split_once('=').unwrap_or((entry, ""));
            let trimmed_id = id.trim();
            if trimmed_id.is_empty() {
                return Err(ConfigError::InvalidValue {
                    variable: AGENTS_VAR,
                    value: entry.to_owned(),
                });
            }
            Ok(ConnectorProperties::new(trimmed_id).with_skills(skills))
        })
        .collect()
}
