use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{HealthResponse, MessageResponse, PongResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rpm-backend API",
        version = "1.0.0",
        description = "Minimal JSON backend for the remote patient monitoring frontend"
    ),
    paths(
        handlers::hello::hello_handler,
        handlers::ping::ping_handler,
        handlers::health::health_handler
    ),
    components(
        schemas(
            MessageResponse,
            PongResponse,
            HealthResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "api", description = "Frontend API endpoints"),
        (name = "health", description = "Health check operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();

        for path in [crate::routes::HELLO, crate::routes::PING, crate::routes::HEALTH] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
        assert_eq!(doc.paths.paths.len(), 3);
    }
}
