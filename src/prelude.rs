// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for convenient use.
//! Users of the library can import everything they need with:
//!
//! ```rust
//! use mikrotik_poe_exporter::prelude::*;
//! ```

// Core types
pub use crate::config::{Config, SshConfig};
pub use crate::error::{AppError, Result};

// Metrics types
pub use crate::metrics::{GroupLabels, MetricsRegistry, PortLabels, ReadLabels};

// Ports and service
pub use crate::collector::PoeStatusService;
pub use crate::ports::{PortGroup, PortRegistry};

// MikroTik client
pub use crate::mikrotik::{
    CommandOutput, GroupPoller, PoeTable, PollState, PortFields, PortRecord, SshTransport,
    Transport,
};
