use crate::error::ApiError;
use axum::http::{Method, Uri};

/// Fallback for any (method, path) pair without a route
///
/// Also installed as the method-not-allowed fallback, so a wrong method on a
/// known path answers 404 like an unknown path does.
pub async fn not_found_handler(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound {
        method,
        path: uri.path().to_string(),
    }
}
