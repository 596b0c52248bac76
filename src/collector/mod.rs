// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! PoE status service
//!
//! Wires the port registry, poller and snapshot cache together and answers
//! per-port status requests.

mod cache;

use futures_util::future::join_all;
use std::sync::Arc;

use crate::error::Result;
use crate::metrics::{GroupLabels, MetricsRegistry};
use crate::mikrotik::{GroupPoller, PortRecord, Transport};
use crate::ports::PortRegistry;

use cache::TelemetryCache;

/// Serves PoE telemetry for the configured ports
#[derive(Clone)]
pub struct PoeStatusService {
    registry: Arc<PortRegistry>,
    cache: TelemetryCache,
}

impl PoeStatusService {
    /// Builds the service without polling the device
    #[must_use]
    pub fn new(
        registry: PortRegistry,
        transport: Arc<dyn Transport>,
        metrics: MetricsRegistry,
    ) -> Self {
        for group in registry.groups() {
            metrics.initialize_group_metrics(&GroupLabels::from(group));
        }
        let poller = GroupPoller::new(transport, metrics.clone());
        Self {
            registry: Arc::new(registry),
            cache: TelemetryCache::new(poller, metrics),
        }
    }

    /// Loads the port specification and polls every group once
    ///
    /// The initial polls populate the cache and check connectivity and
    /// parsing end to end.
    ///
    /// # Errors
    ///
    /// Returns the first configuration, remote or parse error encountered.
    pub async fn startup(
        interfaces: &str,
        transport: Arc<dyn Transport>,
        metrics: MetricsRegistry,
    ) -> Result<Self> {
        let registry = PortRegistry::load(interfaces)?;
        let service = Self::new(registry, transport, metrics);
        service.warm_up().await?;
        Ok(service)
    }

    /// Polls every group in order, stopping at the first failure
    ///
    /// # Errors
    ///
    /// Returns the error of the first group that fails to poll.
    pub async fn warm_up(&self) -> Result<()> {
        for group in self.registry.groups() {
            self.cache.refresh(group).await.inspect_err(|e| {
                tracing::error!("Initial poll of group {} failed: {}", group, e);
            })?;
        }
        tracing::info!(
            "Cached PoE state for {} port(s) in {} group(s)",
            self.registry.len(),
            self.registry.groups().len()
        );
        Ok(())
    }

    /// PoE telemetry for one logical port
    ///
    /// # Errors
    ///
    /// Returns [`crate::AppError::NotFound`] for unknown ports, otherwise any
    /// error from polling the port's group.
    pub async fn get_port_status(&self, name: &str) -> Result<PortRecord> {
        let group = self.registry.group_for(name)?;
        let device_id = self.registry.device_id(name)?;
        self.cache.read(group, device_id).await
    }

    /// Reads every port concurrently, in registry order
    pub async fn get_all_port_status(&self) -> Vec<(String, Result<PortRecord>)> {
        let mut reads = Vec::with_capacity(self.registry.len());
        for name in self.registry.names() {
            reads.push(async move { (name.to_string(), self.get_port_status(name).await) });
        }
        join_all(reads).await
    }

    #[must_use]
    pub fn registry(&self) -> &PortRegistry {
        &self.registry
    }
}
