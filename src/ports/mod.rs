// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Port registry and polling group partitioning
//!
//! `poe monitor` reports a bounded number of ports per invocation, so the
//! configured ports are split into fixed-size groups that are queried together.

use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;

use crate::error::{AppError, Result};

/// Number of ports queried per remote invocation
pub const GROUP_CAPACITY: usize = 4;

/// Ordered batch of device identifiers polled together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortGroup {
    index: usize,
    device_ids: Vec<String>,
}

impl PortGroup {
    #[must_use]
    pub fn new(index: usize, device_ids: Vec<String>) -> Self {
        Self { index, device_ids }
    }

    /// Position of this group in the partition
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn device_ids(&self) -> &[String] {
        &self.device_ids
    }

    #[must_use]
    pub fn contains(&self, device_id: &str) -> bool {
        self.device_ids.iter().any(|id| id == device_id)
    }

    /// Comma-joined identifiers as expected by the monitor command
    #[must_use]
    pub fn command_target(&self) -> String {
        self.device_ids.join(",")
    }
}

impl fmt::Display for PortGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.command_target())
    }
}

/// Configured ports, keyed by logical name, in configuration order
#[derive(Debug, Clone)]
pub struct PortRegistry {
    ports: IndexMap<String, String>,
    groups: Vec<PortGroup>,
    group_by_name: HashMap<String, usize>,
}

impl PortRegistry {
    /// Parses a `name,deviceId;name,deviceId` specification
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if a segment is not exactly one
    /// comma-separated pair.
    pub fn load(spec: &str) -> Result<Self> {
        let mut ports = IndexMap::new();
        for segment in spec.split(';') {
            let parts: Vec<&str> = segment.split(',').collect();
            let [name, device_id] = parts.as_slice() else {
                return Err(AppError::Config(format!(
                    "Invalid port entry '{segment}': expected 'name,deviceId'"
                )));
            };
            let (name, device_id) = (name.trim(), device_id.trim());
            if name.is_empty() || device_id.is_empty() {
                return Err(AppError::Config(format!(
                    "Invalid port entry '{segment}': name and deviceId must be non-empty"
                )));
            }
            if let Some(previous) = ports.insert(name.to_string(), device_id.to_string()) {
                tracing::warn!(
                    "Port '{}' configured twice, '{}' replaces '{}'",
                    name,
                    device_id,
                    previous
                );
            }
        }

        let mut registry = Self {
            ports,
            groups: Vec::new(),
            group_by_name: HashMap::new(),
        };
        registry.groups = registry.partition(GROUP_CAPACITY)?;
        for (name, device_id) in &registry.ports {
            if let Some(group) = registry.groups.iter().find(|g| g.contains(device_id)) {
                registry.group_by_name.insert(name.clone(), group.index());
            }
        }

        tracing::debug!(
            "Loaded {} port(s) into {} group(s)",
            registry.ports.len(),
            registry.groups.len()
        );
        Ok(registry)
    }

    /// Splits device identifiers into groups of at most `capacity`
    ///
    /// The last group holds the remainder and is not padded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if `capacity` is zero.
    pub fn partition(&self, capacity: usize) -> Result<Vec<PortGroup>> {
        if capacity == 0 {
            return Err(AppError::Config(
                "Group capacity must be at least 1".to_string(),
            ));
        }
        let ids: Vec<String> = self.ports.values().cloned().collect();
        Ok(ids
            .chunks(capacity)
            .enumerate()
            .map(|(index, chunk)| PortGroup::new(index, chunk.to_vec()))
            .collect())
    }

    /// Group that polls the given logical port
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown names.
    pub fn group_for(&self, name: &str) -> Result<&PortGroup> {
        self.group_by_name
            .get(name)
            .and_then(|&index| self.groups.get(index))
            .ok_or_else(|| AppError::NotFound(format!("port '{name}'")))
    }

    /// Device-side identifier for the given logical port
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown names.
    pub fn device_id(&self, name: &str) -> Result<&str> {
        self.ports
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| AppError::NotFound(format!("port '{name}'")))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ports.keys().map(String::as_str)
    }

    #[must_use]
    pub fn groups(&self) -> &[PortGroup] {
        &self.groups
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }
}
