use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
}

/// Health check endpoint
///
/// Liveness only: always 200 with the current UTC time in ISO-8601
/// (millisecond precision, `Z` suffix).
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Server is running".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
