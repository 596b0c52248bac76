// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # MikroTik PoE Exporter
//!
//! Per-port Power-over-Ethernet telemetry for MikroTik RouterOS devices.
//!
//! This library polls `/interface/ethernet/poe/monitor` over SSH in groups of
//! ports, parses the printed table, and serves the results through a cache
//! that never makes readers wait for an in-flight poll.
//!
//! ## Main modules
//! - `api`: HTTP API handlers
//! - `collector`: PoE status service and snapshot cache
//! - `config`: configuration management
//! - `error`: error types
//! - `metrics`: Prometheus metrics registry
//! - `mikrotik`: device command execution, polling and table parsing
//! - `ports`: port registry and polling groups
//! - `prelude`: commonly used types and traits

mod api;
mod collector;
mod config;
mod error;
mod metrics;
mod mikrotik;
mod ports;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::{Config, SshConfig};

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router and state
pub use api::{AppState, create_router};

/// PoE status service
pub use collector::PoeStatusService;

/// Metrics registry and labels
pub use metrics::{GroupLabels, MetricsRegistry, PortLabels, ReadLabels};

/// Device transport, polling and parsing
pub use mikrotik::{
    CommandOutput, GroupPoller, PoeTable, PollState, PortFields, PortRecord, SshTransport,
    Transport, monitor_command, parse_poe_table,
};

/// Port registry and polling groups
pub use ports::{GROUP_CAPACITY, PortGroup, PortRegistry};
