// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for MikroTik PoE Exporter application
//!
//! Loads configuration from environment variables, optionally seeded from an
//! env file.

use std::path::Path;

use crate::error::{AppError, Result};

#[cfg(test)]
mod tests;

/// Default configuration values
pub mod defaults {
    pub const SERVER_ADDR: &str = "0.0.0.0:9090";
    pub const SSH_USER: &str = "admin";
    pub const SSH_PORT: u16 = 22;
    pub const SSH_TIMEOUT_SECS: u64 = 30;
    pub const ENV_FILE: &str = "power.env";
    /// Marker file present inside the container image
    pub const DOCKER_MARKER: &str = "/app/.docker";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
    pub const INTERFACES: &str = "MIKROTIK_INTERFACES";
    pub const DEVICE: &str = "MIKROTIK_DEVICE";
    pub const USER: &str = "MIKROTIK_USER";
    pub const KEY_PATH: &str = "MIKROTIK_KEY_PATH";
    pub const SSH_PORT: &str = "MIKROTIK_SSH_PORT";
    pub const SSH_TIMEOUT: &str = "SSH_TIMEOUT_SECONDS";
}

/// SSH access to the MikroTik device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshConfig {
    pub host: String,
    pub user: String,
    pub key_path: String,
    pub port: u16,
    pub timeout_secs: u64,
}

impl SshConfig {
    /// Validates SSH configuration
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(AppError::Config("SSH host cannot be empty".to_string()));
        }
        if self.user.trim().is_empty() {
            return Err(AppError::Config(format!(
                "SSH user cannot be empty for host '{}'",
                self.host
            )));
        }
        if self.key_path.trim().is_empty() {
            return Err(AppError::Config(format!(
                "SSH key path cannot be empty for host '{}'",
                self.host
            )));
        }
        if self.port == 0 {
            return Err(AppError::Config("SSH port cannot be 0".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::Config(
                "SSH timeout must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }

    /// `user@host` destination passed to the ssh client
    #[must_use]
    pub fn destination(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    /// Raw `name,deviceId;...` port specification
    pub interfaces: String,
    pub ssh: SshConfig,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] when a required variable is missing or a
    /// numeric variable does not parse.
    pub fn from_env() -> Result<Self> {
        load_env_file();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| AppError::Config(format!("{key} must be set")))
        };

        let server_addr =
            lookup(env_vars::SERVER_ADDR).unwrap_or_else(|| defaults::SERVER_ADDR.to_string());
        let interfaces = required(env_vars::INTERFACES)?;

        let port = match lookup(env_vars::SSH_PORT) {
            Some(v) => v.trim().parse::<u16>().map_err(|e| {
                AppError::Config(format!("Invalid {}='{}': {}", env_vars::SSH_PORT, v, e))
            })?,
            None => defaults::SSH_PORT,
        };
        let timeout_secs = match lookup(env_vars::SSH_TIMEOUT) {
            Some(v) => v.trim().parse::<u64>().map_err(|e| {
                AppError::Config(format!("Invalid {}='{}': {}", env_vars::SSH_TIMEOUT, v, e))
            })?,
            None => defaults::SSH_TIMEOUT_SECS,
        };

        let ssh = SshConfig {
            host: required(env_vars::DEVICE)?,
            user: lookup(env_vars::USER).unwrap_or_else(|| defaults::SSH_USER.to_string()),
            key_path: required(env_vars::KEY_PATH)?,
            port,
            timeout_secs,
        };
        ssh.validate()?;

        Ok(Config {
            server_addr,
            interfaces,
            ssh,
        })
    }
}

/// Loads `power.env` outside the container, falling back to `.env`
fn load_env_file() {
    if Path::new(defaults::DOCKER_MARKER).exists() {
        tracing::debug!("Running in container, skipping env file");
        return;
    }
    match dotenvy::from_filename(defaults::ENV_FILE) {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(_) => {
            dotenvy::dotenv().ok();
        }
    }
}
