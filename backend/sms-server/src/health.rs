use sms_core::HealthStatus;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;

/// GET /api/health - status, message and timestamp, polled by `wait-healthy`
pub async fn health_check() -> Response {
    (StatusCode::OK, Json(HealthStatus::ok(Utc::now()))).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}
