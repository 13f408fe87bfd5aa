//! Typed API error for HTTP handlers.
//!
//! Converts service errors into proper HTTP responses with a JSON body
//! and status code, so handlers return `Result<Json<T>, ApiError>`
//! instead of losing error context with a bare `StatusCode`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use cellarmatch_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// `Internal` logs the real error server-side and returns a static
/// message to the client — no error detail leakage.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request — invalid input from caller.
    BadRequest(String),
    /// 404 Not Found — requested resource doesn't exist.
    NotFound(String),
    /// 500 Internal Server Error — unexpected failure.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            }
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            err if err.is_not_found() => Self::NotFound(err.to_string()),
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            err => Self::Internal(err.into()),
        }
    }
}
