//! Error types for the property cache service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Service Error Enum ==
/// Unified error type for the property cache service.
///
/// Cache failures are split into connectivity and shape problems so callers
/// can tell a dead Redis apart from a corrupt payload.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Could not reach the cache service
    #[error("cache connection error: {0}")]
    Connection(String),

    /// The cache service answered with something we could not decode
    #[error("malformed cache response: {0}")]
    MalformedResponse(String),

    /// Backing store failure
    #[error("store error: {0}")]
    Store(String),

    /// Invalid request data
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl From<redis::RedisError> for ServiceError {
    fn from(err: redis::RedisError) -> Self {
        ServiceError::Connection(err.to_string())
    }
}

impl From<deadpool_redis::PoolError> for ServiceError {
    fn from(err: deadpool_redis::PoolError) -> Self {
        ServiceError::Connection(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::Connection(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the property cache service.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_maps_to_503() {
        let response = ServiceError::Connection("refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_invalid_request_maps_to_400() {
        let response = ServiceError::InvalidRequest("bad title".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_message_formatting() {
        let err = ServiceError::MalformedResponse("not json".to_string());
        assert_eq!(err.to_string(), "malformed cache response: not json");
    }
}
