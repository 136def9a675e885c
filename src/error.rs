//! Search pipeline errors

use crate::gateway::GatewayError;
use thiserror::Error;

/// Coarse classification used for status codes and log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad caller input
    Validation,
    /// Provider call failed
    Gateway,
    /// Anything else
    Internal,
}

/// Error raised anywhere between the interface layer and the provider
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Please enter a search query")]
    EmptyQuery,

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("{0}")]
    Internal(String),
}

impl SearchError {
    pub fn internal(message: impl std::fmt::Display) -> Self {
        SearchError::Internal(message.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::EmptyQuery => ErrorKind::Validation,
            SearchError::Gateway(_) => ErrorKind::Gateway,
            SearchError::Internal(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(SearchError::EmptyQuery.kind(), ErrorKind::Validation);
        assert_eq!(
            SearchError::from(GatewayError::Client("x".into())).kind(),
            ErrorKind::Gateway
        );
        assert_eq!(SearchError::internal("boom").kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_gateway_message_is_transparent() {
        let err = SearchError::from(GatewayError::Api {
            status: 500,
            message: "provider outage".to_string(),
        });
        assert_eq!(err.to_string(), "provider outage (HTTP 500)");
    }
}
