//! Gateway error type

use thiserror::Error;

/// Failure of a provider call. Not retried; surfaced to the caller as-is.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Network, TLS or timeout failure
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    /// Provider body was not valid JSON
    #[error("invalid provider response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Success body without a `results` array
    #[error("invalid provider response: missing results array")]
    MissingResults,

    /// Client could not be constructed
    #[error("invalid client configuration: {0}")]
    Client(String),
}

impl GatewayError {
    /// HTTP status returned by the provider, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Api { status, .. } => Some(*status),
            GatewayError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
