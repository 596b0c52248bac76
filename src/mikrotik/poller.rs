// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Per-group PoE monitor polling

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::error::Result;
use crate::metrics::{GroupLabels, MetricsRegistry};
use crate::ports::PortGroup;

use super::parse::parse_poe_table;
use super::ssh::Transport;
use super::types::PoeTable;

/// Builds the console command that reports PoE state for a group once
#[must_use]
pub fn monitor_command(group: &PortGroup) -> String {
    format!(
        "/interface/ethernet/poe/monitor {} once",
        group.command_target()
    )
}

/// "A remote poll is in flight" flag, shared by every group
///
/// Plain set/clear with no counting: when two polls overlap, the first to
/// finish clears the flag for both.
#[derive(Clone, Default)]
pub struct PollState {
    polling: Arc<AtomicBool>,
}

impl PollState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_polling(&self) -> bool {
        self.polling.load(Ordering::Acquire)
    }

    /// Sets the flag until the returned guard is dropped
    pub(crate) fn begin(&self) -> PollGuard<'_> {
        self.polling.store(true, Ordering::Release);
        PollGuard { state: self }
    }
}

pub(crate) struct PollGuard<'a> {
    state: &'a PollState,
}

impl Drop for PollGuard<'_> {
    fn drop(&mut self) {
        self.state.polling.store(false, Ordering::Release);
    }
}

/// Runs the monitor command for one group and parses the result
#[derive(Clone)]
pub struct GroupPoller {
    transport: Arc<dyn Transport>,
    state: PollState,
    metrics: MetricsRegistry,
}

impl GroupPoller {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, metrics: MetricsRegistry) -> Self {
        Self {
            transport,
            state: PollState::new(),
            metrics,
        }
    }

    #[must_use]
    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Polls `group` once
    ///
    /// The poll flag is raised only for the remote call itself. Errors are
    /// returned as-is; there is no retry.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AppError::Remote`] if the command fails and
    /// [`crate::AppError::Parse`] if its output is not a monitor table.
    pub async fn poll(&self, group: &PortGroup) -> Result<PoeTable> {
        let command = monitor_command(group);
        let labels = GroupLabels::from(group);
        let start = Instant::now();

        let output = {
            let _guard = self.state.begin();
            self.transport.execute(&command).await
        };
        let result = output.and_then(|o| parse_poe_table(&o.stdout));
        let duration = start.elapsed().as_secs_f64();

        match result {
            Ok(table) => {
                self.metrics.record_poll_success(&labels, duration);
                self.metrics.update_ports(&table);
                tracing::debug!(
                    "Polled group {} in {:.3}s ({} ports)",
                    group,
                    duration,
                    table.len()
                );
                Ok(table)
            }
            Err(e) => {
                self.metrics.record_poll_error(&labels, duration);
                tracing::warn!("Failed to poll group {} in {:.3}s: {}", group, duration, e);
                Err(e)
            }
        }
    }
}
