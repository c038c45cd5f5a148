use crate::models::HealthResponse;
use crate::routes;
use axum::Json;

/// GET /health handler - Liveness check
///
/// The service holds no external resources, so it is healthy whenever it can
/// answer at all.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler() -> Json<HealthResponse> {
    tracing::debug!("Health check passed");
    Json(HealthResponse {
        ok: true,
        status: Some("healthy".to_string()),
        message: Some("API is running".to_string()),
    })
}
