// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Poll and read bookkeeping helpers

use crate::metrics::labels::{GroupLabels, ReadLabels};
use prometheus_client::encoding::text::encode;

use super::MetricsRegistry;

impl MetricsRegistry {
    pub async fn encode_metrics(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let registry = self.registry.lock().await;
        let mut buffer = String::new();
        encode(&mut buffer, &registry)?;
        Ok(buffer)
    }

    pub fn record_poll_success(&self, labels: &GroupLabels, duration_secs: f64) {
        self.polls.get_or_create(labels).inc();
        self.record_poll_duration(labels, duration_secs);
    }

    pub fn record_poll_error(&self, labels: &GroupLabels, duration_secs: f64) {
        self.poll_errors.get_or_create(labels).inc();
        self.record_poll_duration(labels, duration_secs);
    }

    fn record_poll_duration(&self, labels: &GroupLabels, duration_secs: f64) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let millis = (duration_secs * 1000.0).round() as i64;
        self.poll_duration_milliseconds
            .get_or_create(labels)
            .set(millis);
    }

    /// Initialize poll metrics for a group to zero
    ///
    /// Counters exist from the start so Prometheus can compute rates before
    /// the first success or error.
    pub fn initialize_group_metrics(&self, labels: &GroupLabels) {
        let _ = self.polls.get_or_create(labels);
        let _ = self.poll_errors.get_or_create(labels);
        let _ = self.poll_duration_milliseconds.get_or_create(labels);
    }

    pub fn record_read(&self, cached: bool) {
        self.reads.get_or_create(&ReadLabels::new(cached)).inc();
    }

    pub fn poll_count(&self, labels: &GroupLabels) -> u64 {
        self.polls.get_or_create(labels).get()
    }

    pub fn poll_error_count(&self, labels: &GroupLabels) -> u64 {
        self.poll_errors.get_or_create(labels).get()
    }

    pub fn read_count(&self, cached: bool) -> u64 {
        self.reads.get_or_create(&ReadLabels::new(cached)).get()
    }
}
