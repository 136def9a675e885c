//! Error to HTTP response translation

use crate::error::{ErrorKind, SearchError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{debug, error, warn};

impl SearchError {
    /// Status code for this error. Gateway and internal failures share 500.
    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Gateway | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field
    pub fn public_message(&self) -> String {
        match self.kind() {
            ErrorKind::Validation => self.to_string(),
            ErrorKind::Gateway | ErrorKind::Internal => format!("Search failed: {}", self),
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        match self.kind() {
            ErrorKind::Validation => debug!("Rejected search: {}", self),
            ErrorKind::Gateway => warn!("Provider error: {}", self),
            ErrorKind::Internal => error!("Search error: {}", self),
        }

        let body = Json(json!({ "error": self.public_message() }));
        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::GatewayError;

    #[test]
    fn test_validation_maps_to_400() {
        let err = SearchError::EmptyQuery;
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Please enter a search query");
    }

    #[test]
    fn test_gateway_and_internal_map_to_500() {
        let gateway = SearchError::from(GatewayError::Client("no key".into()));
        assert_eq!(gateway.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            gateway.public_message(),
            "Search failed: invalid client configuration: no key"
        );

        let internal = SearchError::internal("bad body");
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.public_message(), "Search failed: bad body");
    }
}
