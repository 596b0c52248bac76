// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Remote command execution over SSH

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

use crate::config::SshConfig;
use crate::error::{AppError, Result};

use super::types::CommandOutput;

/// Connection timeout handed to the ssh client (5 seconds)
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Executes a console command on the device
#[async_trait]
pub trait Transport: Send + Sync {
    /// Runs `command` and returns its stdout
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Remote`] if the command cannot be run or exits
    /// unsuccessfully.
    async fn execute(&self, command: &str) -> Result<CommandOutput>;
}

/// [`Transport`] backed by the system `ssh` client with key authentication
pub struct SshTransport {
    config: SshConfig,
    command_timeout: Duration,
}

impl SshTransport {
    #[must_use]
    pub fn new(config: SshConfig) -> Self {
        let command_timeout = Duration::from_secs(config.timeout_secs);
        Self {
            config,
            command_timeout,
        }
    }

    fn args(&self, command: &str) -> Vec<String> {
        vec![
            "-i".to_string(),
            self.config.key_path.clone(),
            "-p".to_string(),
            self.config.port.to_string(),
            "-o".to_string(),
            "BatchMode=yes".to_string(),
            "-o".to_string(),
            format!("ConnectTimeout={CONNECT_TIMEOUT_SECS}"),
            self.config.destination(),
            command.to_string(),
        ]
    }
}

#[async_trait]
impl Transport for SshTransport {
    async fn execute(&self, command: &str) -> Result<CommandOutput> {
        tracing::debug!(
            "Executing '{}' on {}:{}",
            command,
            self.config.host,
            self.config.port
        );

        let mut ssh = Command::new("ssh");
        ssh.args(self.args(command))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = timeout(self.command_timeout, ssh.output())
            .await
            .map_err(|_| {
                AppError::Remote(format!(
                    "'{}' on {} did not finish within {}s",
                    command,
                    self.config.host,
                    self.command_timeout.as_secs()
                ))
            })?
            .map_err(|e| AppError::Remote(format!("failed to spawn ssh: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::warn!(
                "'{}' on {} failed with {}: {}",
                command,
                self.config.host,
                output.status,
                stderr
            );
            return Err(AppError::Remote(format!(
                "'{}' exited with {}: {}",
                command, output.status, stderr
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        tracing::trace!("Output of '{}':\n{}", command, stdout);
        Ok(CommandOutput { stdout })
    }
}
