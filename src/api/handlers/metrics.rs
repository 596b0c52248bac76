use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::AppState;

const TEXT_FORMAT: &str = "text/plain; version=0.0.4";

/// GET /metrics
///
/// Encodes poll, read and per-port gauges as of the last poll. Scraping does
/// not poll the device.
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.metrics.encode_metrics().await {
        Ok(body) => {
            tracing::trace!("/metrics encoded {} bytes", body.len());
            (StatusCode::OK, [(header::CONTENT_TYPE, TEXT_FORMAT)], body).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {e}"),
            )
                .into_response()
        }
    }
}
