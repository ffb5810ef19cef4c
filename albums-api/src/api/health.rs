//! Health check endpoint

use axum::{routing::get, Router};
use serde::Serialize;

use super::json::PrettyJson;
use crate::AppState;

/// Health check response: status, module name, and version
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// GET /health
pub async fn health_check() -> PrettyJson<HealthResponse> {
    PrettyJson(HealthResponse {
        status: "ok".to_string(),
        module: "albums-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
