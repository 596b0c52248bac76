// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Per-port gauge updates from polled tables

use crate::metrics::labels::PortLabels;
use crate::metrics::parsers::parse_quantity;
use crate::mikrotik::{POWERED_ON, PoeTable, fields};

use super::MetricsRegistry;

impl MetricsRegistry {
    /// Update per-port gauges from a freshly polled group table
    ///
    /// Ports that are not powered report no electrical values, so their
    /// power, voltage and current gauges drop to zero.
    pub fn update_ports(&self, table: &PoeTable) {
        for (port, values) in table {
            let labels = PortLabels { port: port.clone() };
            let powered = values.get(fields::STATUS).map(String::as_str) == Some(POWERED_ON);
            self.port_powered
                .get_or_create(&labels)
                .set(i64::from(powered));

            let quantity = |field: &str, unit: &str| {
                values
                    .get(field)
                    .and_then(|v| parse_quantity(v, unit))
                    .unwrap_or(0.0)
            };
            self.port_power_watts
                .get_or_create(&labels)
                .set(quantity(fields::POWER, "W"));
            self.port_voltage_volts
                .get_or_create(&labels)
                .set(quantity(fields::VOLTAGE, "V"));
            self.port_current_milliamps
                .get_or_create(&labels)
                .set(quantity(fields::CURRENT, "mA"));
        }
    }
}
