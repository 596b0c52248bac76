// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::AppState;
use crate::error::AppError;
use crate::mikrotik::PortRecord;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of `GET /ports`
#[derive(Debug, Default, Serialize)]
pub struct AllPortsResponse {
    pub ports: BTreeMap<String, PortRecord>,
    pub errors: BTreeMap<String, String>,
}

fn status_for(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::Remote(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(error: &AppError) -> Response {
    (
        status_for(error),
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

/// GET /ports/{name}
pub async fn port_status(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Response {
    match state.service.get_port_status(&name).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => {
            tracing::warn!("Status request for port '{}' failed: {}", name, e);
            error_response(&e)
        }
    }
}

/// GET /ports
///
/// Reads every port concurrently. Per-port failures are reported in
/// `errors` instead of failing the whole request.
pub async fn all_ports(State(state): State<Arc<AppState>>) -> Response {
    let mut response = AllPortsResponse::default();
    for (name, result) in state.service.get_all_port_status().await {
        match result {
            Ok(record) => {
                response.ports.insert(name, record);
            }
            Err(e) => {
                tracing::warn!("Status read for port '{}' failed: {}", name, e);
                response.errors.insert(name, e.to_string());
            }
        }
    }
    (StatusCode::OK, Json(response)).into_response()
}
