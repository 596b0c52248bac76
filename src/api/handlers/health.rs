use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::AppState;

/// Health check endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub ports: usize,
    pub groups: usize,
}

/// GET /health
///
/// Reports service status, application version and the configured port layout.
/// Does not contact the device.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let registry = state.service.registry();
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        ports: registry.len(),
        groups: registry.groups().len(),
    };

    (StatusCode::OK, Json(response))
}
