// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! In-memory transport for unit tests

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::error::{AppError, Result};

use super::poller::PollState;
use super::ssh::Transport;
use super::types::CommandOutput;

type Responder = Box<dyn Fn(&str) -> Result<String> + Send + Sync>;

/// Joins table rows with CRLF and appends the two footer lines
pub(crate) fn table_output(rows: &[&str]) -> String {
    let mut out = rows.join("\r\n");
    out.push_str("\r\n\r\n");
    out
}

pub(crate) struct ScriptedTransport {
    respond: Responder,
    calls: Mutex<Vec<String>>,
    observed: Mutex<Option<PollState>>,
    flag_seen: Mutex<Vec<bool>>,
    gate: Option<Arc<Notify>>,
    entered: Arc<Notify>,
}

impl ScriptedTransport {
    pub(crate) fn from_fn<F>(respond: F) -> Self
    where
        F: Fn(&str) -> Result<String> + Send + Sync + 'static,
    {
        Self {
            respond: Box::new(respond),
            calls: Mutex::new(Vec::new()),
            observed: Mutex::new(None),
            flag_seen: Mutex::new(Vec::new()),
            gate: None,
            entered: Arc::new(Notify::new()),
        }
    }

    pub(crate) fn ok(stdout: String) -> Self {
        Self::from_fn(move |_| Ok(stdout.clone()))
    }

    pub(crate) fn failing(message: &str) -> Self {
        let message = message.to_string();
        Self::from_fn(move |_| Err(AppError::Remote(message.clone())))
    }

    /// Every call waits for one `notify_one` on `gate` before responding
    pub(crate) fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Notified each time a call starts
    pub(crate) fn entered(&self) -> Arc<Notify> {
        self.entered.clone()
    }

    /// Records the poll flag as seen from inside each call
    pub(crate) fn observe(&self, state: PollState) {
        *self.observed.lock().unwrap() = Some(state);
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn flag_seen_during_calls(&self) -> Vec<bool> {
        self.flag_seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, command: &str) -> Result<CommandOutput> {
        self.calls.lock().unwrap().push(command.to_string());
        let seen = self
            .observed
            .lock()
            .unwrap()
            .as_ref()
            .map(PollState::is_polling);
        if let Some(seen) = seen {
            self.flag_seen.lock().unwrap().push(seen);
        }

        self.entered.notify_one();
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        (self.respond)(command).map(|stdout| CommandOutput { stdout })
    }
}
