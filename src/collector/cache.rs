// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Read-through cache of per-group PoE snapshots

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{AppError, Result};
use crate::metrics::MetricsRegistry;
use crate::mikrotik::{GroupPoller, PoeTable, PortRecord};
use crate::ports::PortGroup;

/// Latest polled table per group, keyed by group index
///
/// A read while any poll is in flight is served from the existing snapshot;
/// otherwise the read polls its group and replaces the snapshot.
#[derive(Clone)]
pub(crate) struct TelemetryCache {
    poller: GroupPoller,
    snapshots: Arc<RwLock<HashMap<usize, PoeTable>>>,
    metrics: MetricsRegistry,
}

impl TelemetryCache {
    #[must_use]
    pub(crate) fn new(poller: GroupPoller, metrics: MetricsRegistry) -> Self {
        Self {
            poller,
            snapshots: Arc::new(RwLock::new(HashMap::new())),
            metrics,
        }
    }

    /// Returns the record for `device_id`, polling `group` unless a poll is in flight
    pub(crate) async fn read(&self, group: &PortGroup, device_id: &str) -> Result<PortRecord> {
        if self.poller.state().is_polling() {
            tracing::debug!("Poll in flight, serving {} from cache", device_id);
            let snapshots = self.snapshots.read().await;
            let fields = snapshots
                .get(&group.index())
                .and_then(|table| table.get(device_id))
                .cloned()
                .ok_or_else(|| not_cached(group, device_id))?;
            self.metrics.record_read(true);
            return Ok(PortRecord::new(fields, true));
        }

        let table = self.refresh(group).await?;
        let fields = table
            .get(device_id)
            .cloned()
            .ok_or_else(|| not_reported(group, device_id))?;
        self.metrics.record_read(false);
        Ok(PortRecord::new(fields, false))
    }

    /// Polls `group` and stores the result as its snapshot
    ///
    /// On error the previous snapshot is kept.
    pub(crate) async fn refresh(&self, group: &PortGroup) -> Result<PoeTable> {
        let table = self.poller.poll(group).await?;
        self.snapshots
            .write()
            .await
            .insert(group.index(), table.clone());
        tracing::trace!("Cached snapshot for group {}", group);
        Ok(table)
    }

    #[cfg(test)]
    pub(crate) async fn snapshot(&self, group: &PortGroup) -> Option<PoeTable> {
        self.snapshots.read().await.get(&group.index()).cloned()
    }

    #[cfg(test)]
    pub(crate) fn poller(&self) -> &GroupPoller {
        &self.poller
    }
}

fn not_cached(group: &PortGroup, device_id: &str) -> AppError {
    AppError::NotFound(format!(
        "port '{device_id}' has no cached snapshot in group {group}"
    ))
}

fn not_reported(group: &PortGroup, device_id: &str) -> AppError {
    AppError::NotFound(format!(
        "port '{device_id}' was not reported by monitor for group {group}"
    ))
}
