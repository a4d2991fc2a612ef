//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::types::ApiContext;
use crate::models::ReadingPolicy;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub app: &'static str,
    pub version: &'static str,
    pub reading_policy: ReadingPolicy,
}

/// `GET /api/health`: liveness check for the kiosk front end.
pub async fn check(State(ctx): State<ApiContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        app: crate::config::APP_NAME,
        version: crate::config::APP_VERSION,
        reading_policy: ctx.config.reading_policy,
    })
}
