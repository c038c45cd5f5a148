use crate::models::MessageResponse;
use crate::routes;
use axum::Json;

pub const HELLO_MESSAGE: &str = "Hello from RPM backend!";

/// GET /api/hello handler - Fixed greeting used by the frontend
#[utoipa::path(
    get,
    path = routes::HELLO,
    responses(
        (status = 200, description = "Greeting", body = MessageResponse)
    ),
    tag = "api"
)]
pub async fn hello_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: HELLO_MESSAGE.to_string(),
    })
}
