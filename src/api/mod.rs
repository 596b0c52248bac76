// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! HTTP API module for MikroTik PoE Exporter
//!
//! Provides REST API endpoints for health checks, per-port PoE status and
//! Prometheus metrics export.
//!
//! # Endpoints
//! - `GET /health` — health check
//! - `GET /ports` — PoE status of every configured port
//! - `GET /ports/{name}` — PoE status of one port
//! - `GET /metrics` — Prometheus metrics

pub mod handlers;

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::collector::PoeStatusService;
use crate::config::Config;
use crate::metrics::MetricsRegistry;

/// Application state shared with endpoints
pub struct AppState {
    pub config: Config,
    pub service: PoeStatusService,
    pub metrics: MetricsRegistry,
}

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ports", get(handlers::all_ports))
        .route("/ports/{name}", get(handlers::port_status))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SshConfig;
    use crate::mikrotik::testing::ScriptedTransport;
    use crate::ports::PortRegistry;

    fn test_config() -> Config {
        Config {
            server_addr: "127.0.0.1:9090".to_string(),
            interfaces: "cam,ether1".to_string(),
            ssh: SshConfig {
                host: "192.168.88.1".to_string(),
                user: "admin".to_string(),
                key_path: "/keys/id".to_string(),
                port: 22,
                timeout_secs: 30,
            },
        }
    }

    #[test]
    fn test_create_router() {
        let config = test_config();
        let metrics = MetricsRegistry::new();
        let registry = PortRegistry::load(&config.interfaces).unwrap();
        let transport = Arc::new(ScriptedTransport::ok(String::new()));
        let service = PoeStatusService::new(registry, transport, metrics.clone());
        let app_state = Arc::new(AppState {
            config,
            service,
            metrics,
        });

        let _router = create_router(app_state);
        // If we get here without panicking, the router was created successfully
    }
}
