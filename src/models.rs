use serde::{Deserialize, Serialize};

/// Response type for the hello endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Response type for the ping endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct PongResponse {
    /// Wall-clock time in milliseconds since the Unix epoch
    pub pong: i64,
}

/// Response type for the health check endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct HealthResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
