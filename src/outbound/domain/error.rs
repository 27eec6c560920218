//! Error types for outbound request validation.

use thiserror::Error;

/// Errors returned while resolving an outbound request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OutboundDomainError {
    /// The engine-supplied variables could not be bound.
    #[error("invalid outbound request variables: {0}")]
    Binding(String),

    /// The mode is neither `REST` nor `A2A`.
    #[error("unsupported mode: {0} (use REST or A2A)")]
    UnsupportedMode(String),

    /// The base URL is empty after trimming.
    #[error("base URL must not be empty")]
    EmptyBaseUrl,

    /// The base URL does not have an `http://` or `https://` prefix.
    #[error("base URL '{0}' must start with 'http://' or 'https://'")]
    InvalidBaseUrl(String),

    /// A caller-supplied header name or value is not valid HTTP.
    #[error("invalid header '{name}': {reason}")]
    InvalidHeader {
        /// Header name as supplied.
        name: String,
        /// Why the header was rejected.
        reason: String,
    },

    /// The request body could not be encoded.
    #[error("failed to encode request body: {0}")]
    Encoding(String),
}
