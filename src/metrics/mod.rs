// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry and update module for MikroTik PoE Exporter
//!
//! Contains types for labels, value parsers, and the Prometheus metrics registry.

mod labels;
mod parsers;
mod registry;


/// Labels for polling groups, ports and cache reads
pub use labels::{GroupLabels, PortLabels, ReadLabels};

/// Prometheus metrics registry
pub use registry::MetricsRegistry;
