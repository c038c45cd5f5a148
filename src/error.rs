use axum::{
    Json,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Every unmatched request ends up here, whether the path is unknown or the
/// method is not registered for a known path.
#[derive(Debug)]
pub enum ApiError {
    /// No route registered for this (method, path) pair
    NotFound { method: Method, path: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound { method, path } => {
                tracing::debug!("No route for {} {}", method, path);
                (StatusCode::NOT_FOUND, "not found".to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
