use crate::models::PongResponse;
use crate::routes;
use axum::Json;
use chrono::Utc;

/// GET /api/ping handler - Echo the current wall-clock time
///
/// `pong` is the number of milliseconds since the Unix epoch, read at the
/// moment the request is handled.
#[utoipa::path(
    get,
    path = routes::PING,
    responses(
        (status = 200, description = "Current server time in epoch milliseconds", body = PongResponse)
    ),
    tag = "api"
)]
pub async fn ping_handler() -> Json<PongResponse> {
    Json(PongResponse {
        pong: Utc::now().timestamp_millis(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        Router::new().route(routes::PING, get(ping_handler))
    }

    async fn ping(app: Router) -> i64 {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/ping")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: PongResponse = serde_json::from_slice(&body).unwrap();
        response_json.pong
    }

    #[tokio::test]
    async fn test_ping_returns_current_time() {
        let before = Utc::now().timestamp_millis();
        let pong = ping(setup_test_app()).await;
        let after = Utc::now().timestamp_millis();

        assert!(before <= pong && pong <= after, "{before} <= {pong} <= {after}");
    }

    #[tokio::test]
    async fn test_ping_is_non_decreasing() {
        let app = setup_test_app();

        let first = ping(app.clone()).await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let before_second = Utc::now().timestamp_millis();
        let second = ping(app).await;

        assert!(second >= first);
        assert!(second >= before_second);
    }

    #[tokio::test]
    async fn test_ping_body_shape() {
        let response = setup_test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/ping")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 1);
        assert!(object["pong"].is_i64());
    }
}
