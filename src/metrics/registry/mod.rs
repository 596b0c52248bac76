// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry and update logic

mod init;
mod scrape;
mod update;

use crate::metrics::labels::{GroupLabels, PortLabels, ReadLabels};
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use tokio::sync::Mutex;

type FloatGauge = Gauge<f64, AtomicU64>;

#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Arc<Mutex<Registry>>,
    // poll status
    polls: Family<GroupLabels, Counter>,
    poll_errors: Family<GroupLabels, Counter>,
    poll_duration_milliseconds: Family<GroupLabels, Gauge>,
    // cache behaviour
    reads: Family<ReadLabels, Counter>,
    // per-port telemetry from the latest successful poll
    port_powered: Family<PortLabels, Gauge>,
    port_power_watts: Family<PortLabels, FloatGauge>,
    port_voltage_volts: Family<PortLabels, FloatGauge>,
    port_current_milliamps: Family<PortLabels, FloatGauge>,
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mikrotik::{PoeTable, PortFields};

    fn port(status: &str, power: Option<&str>) -> PortFields {
        let mut fields = PortFields::new();
        fields.insert("poe-out-status".to_string(), status.to_string());
        if let Some(power) = power {
            fields.insert("poe-out-power".to_string(), power.to_string());
            fields.insert("poe-out-voltage".to_string(), "53.4V".to_string());
            fields.insert("poe-out-current".to_string(), "40mA".to_string());
        }
        fields
    }

    fn group(name: &str) -> GroupLabels {
        GroupLabels {
            group: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_poll_counters() {
        let metrics = MetricsRegistry::new();
        let labels = group("ether1,ether2");

        metrics.record_poll_success(&labels, 0.25);
        metrics.record_poll_success(&labels, 0.5);
        metrics.record_poll_error(&labels, 1.0);

        assert_eq!(metrics.poll_count(&labels), 2);
        assert_eq!(metrics.poll_error_count(&labels), 1);
        assert_eq!(
            metrics.poll_duration_milliseconds.get_or_create(&labels).get(),
            1000
        );
    }

    #[tokio::test]
    async fn test_read_counters() {
        let metrics = MetricsRegistry::new();
        metrics.record_read(true);
        metrics.record_read(true);
        metrics.record_read(false);

        assert_eq!(metrics.read_count(true), 2);
        assert_eq!(metrics.read_count(false), 1);
    }

    #[tokio::test]
    async fn test_update_ports_sets_gauges() {
        let metrics = MetricsRegistry::new();
        let mut table = PoeTable::new();
        table.insert("ether1".to_string(), port("powered-on", Some("2.5W")));
        table.insert("ether2".to_string(), port("short-circuit", None));

        metrics.update_ports(&table);

        let ether1 = PortLabels {
            port: "ether1".to_string(),
        };
        let ether2 = PortLabels {
            port: "ether2".to_string(),
        };
        assert_eq!(metrics.port_powered.get_or_create(&ether1).get(), 1);
        assert_eq!(metrics.port_powered.get_or_create(&ether2).get(), 0);
        assert!((metrics.port_power_watts.get_or_create(&ether1).get() - 2.5).abs() < f64::EPSILON);
        assert!((metrics.port_voltage_volts.get_or_create(&ether1).get() - 53.4).abs() < 1e-9);
        assert!((metrics.port_current_milliamps.get_or_create(&ether1).get() - 40.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_port_off_resets_electrical_gauges() {
        let metrics = MetricsRegistry::new();
        let mut table = PoeTable::new();
        table.insert("ether1".to_string(), port("powered-on", Some("2.5W")));
        metrics.update_ports(&table);

        table.insert("ether1".to_string(), port("short-circuit", None));
        metrics.update_ports(&table);

        let ether1 = PortLabels {
            port: "ether1".to_string(),
        };
        assert_eq!(metrics.port_powered.get_or_create(&ether1).get(), 0);
        assert_eq!(metrics.port_power_watts.get_or_create(&ether1).get(), 0.0);
    }

    #[tokio::test]
    async fn test_encode_metrics_contains_names() {
        let metrics = MetricsRegistry::new();
        let labels = group("ether1");
        metrics.initialize_group_metrics(&labels);
        metrics.record_read(false);

        let text = metrics.encode_metrics().await.unwrap();
        assert!(text.contains("mikrotik_poe_polls_total"));
        assert!(text.contains("mikrotik_poe_poll_errors_total"));
        assert!(text.contains("mikrotik_poe_reads_total"));
        assert!(text.contains("group=\"ether1\""));
    }
}
