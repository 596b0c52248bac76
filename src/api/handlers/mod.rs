// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod health;
mod metrics;
mod ports;

pub use health::health_check;
pub use metrics::metrics_handler;
pub use ports::{all_ports, port_status};
