use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::key::KeyError;
use crate::store::StoreError;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Custom error type for API endpoints
///
/// Maps each error kind to its HTTP status code and a JSON body. The auth
/// gate fails fast before any store access; everything else propagates here
/// unchanged from the components, and unknown errors fall back to a generic
/// 500 without leaking internal detail.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or mismatched shared-secret token
    Unauthorized,
    /// Malformed key path in the request
    InvalidKey(String),
    /// Continuation cursor the backend does not recognize
    InvalidCursor(String),
    /// Store backend I/O failure
    StoreUnavailable(StoreError),
    /// Anything else
    Unhandled(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Missing or invalid token".to_string(),
            ),
            ApiError::InvalidKey(msg) => (StatusCode::BAD_REQUEST, format!("Invalid key: {}", msg)),
            ApiError::InvalidCursor(cursor) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid cursor: {}", cursor),
            ),
            ApiError::StoreUnavailable(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Store unavailable: {}", err),
            ),
            ApiError::Unhandled(err) => {
                tracing::error!("Unhandled error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<KeyError> for ApiError {
    fn from(err: KeyError) -> Self {
        ApiError::InvalidKey(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidCursor(cursor) => ApiError::InvalidCursor(cursor),
            other => ApiError::StoreUnavailable(other),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Unhandled(err)
    }
}
