// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Type definitions for PoE telemetry

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Raw `field -> value` pairs reported for one port
pub type PortFields = BTreeMap<String, String>;

/// Parsed monitor output for one group, keyed by device identifier
pub type PoeTable = HashMap<String, PortFields>;

/// Status value of a port that is delivering power
pub const POWERED_ON: &str = "powered-on";

/// Field names reported by `/interface/ethernet/poe/monitor`
pub mod fields {
    pub const STATUS: &str = "poe-out-status";
    pub const VOLTAGE: &str = "poe-out-voltage";
    pub const CURRENT: &str = "poe-out-current";
    pub const POWER: &str = "poe-out-power";
}

/// PoE telemetry for one port as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortRecord {
    #[serde(flatten)]
    pub fields: PortFields,
    /// Served from an earlier poll rather than one made for this request
    pub cached: bool,
}

impl PortRecord {
    #[must_use]
    pub fn new(fields: PortFields, cached: bool) -> Self {
        Self { fields, cached }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

/// Output of one remote command
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub stdout: String,
}
