// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Registry initialization and metric registration

use crate::metrics::labels::{GroupLabels, PortLabels, ReadLabels};
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{FloatGauge, MetricsRegistry};

impl MetricsRegistry {
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let polls = Family::<GroupLabels, Counter>::default();
        registry.register(
            "mikrotik_poe_polls",
            "Successful PoE monitor polls per port group",
            polls.clone(),
        );
        let poll_errors = Family::<GroupLabels, Counter>::default();
        registry.register(
            "mikrotik_poe_poll_errors",
            "Failed PoE monitor polls per port group",
            poll_errors.clone(),
        );
        let poll_duration_milliseconds = Family::<GroupLabels, Gauge>::default();
        registry.register(
            "mikrotik_poe_poll_duration_milliseconds",
            "Duration of the last PoE monitor poll in milliseconds",
            poll_duration_milliseconds.clone(),
        );

        let reads = Family::<ReadLabels, Counter>::default();
        registry.register(
            "mikrotik_poe_reads",
            "Port status reads, by whether they were served from cache",
            reads.clone(),
        );

        let port_powered = Family::<PortLabels, Gauge>::default();
        registry.register(
            "mikrotik_poe_port_powered",
            "PoE output status (1=powered-on,0=other)",
            port_powered.clone(),
        );
        let port_power_watts = Family::<PortLabels, FloatGauge>::default();
        registry.register(
            "mikrotik_poe_port_power_watts",
            "PoE output power in watts",
            port_power_watts.clone(),
        );
        let port_voltage_volts = Family::<PortLabels, FloatGauge>::default();
        registry.register(
            "mikrotik_poe_port_voltage_volts",
            "PoE output voltage in volts",
            port_voltage_volts.clone(),
        );
        let port_current_milliamps = Family::<PortLabels, FloatGauge>::default();
        registry.register(
            "mikrotik_poe_port_current_milliamps",
            "PoE output current in milliamps",
            port_current_milliamps.clone(),
        );

        Self {
            registry: Arc::new(Mutex::new(registry)),
            polls,
            poll_errors,
            poll_duration_milliseconds,
            reads,
            port_powered,
            port_power_watts,
            port_voltage_volts,
            port_current_milliamps,
        }
    }
}
