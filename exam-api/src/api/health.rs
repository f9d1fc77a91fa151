//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
    /// Whether the results file has finished loading
    pub ready: bool,
    /// Number of records currently served
    pub records: usize,
}

/// GET /health
///
/// Reports "ok" while the dataset is still loading; `ready` tells the two
/// apart.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "exam-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        ready: state.is_ready(),
        records: state.snapshot().len(),
    })
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
