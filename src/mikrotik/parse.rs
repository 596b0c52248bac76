// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! `poe monitor` table parsing
//!
//! The monitor command prints one header row of interface names followed by
//! one row per field, values aligned under the header columns:
//!
//! ```text
//!                name: ether1     ether2        ether3
//!      poe-out-status: powered-on short-circuit powered-on
//!     poe-out-voltage: 53.4V      53.1V
//!       poe-out-power: 2.1W       5.1W
//! ```
//!
//! Once a port stops reporting `powered-on`, RouterOS drops its column from
//! the rows that follow and the remaining values shift left.

use crate::error::{AppError, Result};

use super::types::{POWERED_ON, PoeTable, PortFields, fields};

/// Trailing lines of the ssh session output that are not part of the table
const FOOTER_LINES: usize = 2;

/// Parses `poe monitor` output into per-port field maps
pub fn parse_poe_table(stdout: &str) -> Result<PoeTable> {
    let mut lines: Vec<&str> = stdout
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    lines.truncate(lines.len().saturating_sub(FOOTER_LINES));

    let mut rows = lines
        .iter()
        .map(|line| line.split_whitespace().collect::<Vec<_>>())
        .filter(|row| !row.is_empty());

    let header = rows
        .next()
        .ok_or_else(|| AppError::Parse("response has no header row".to_string()))?;
    let columns = &header[1..];
    if columns.is_empty() {
        return Err(AppError::Parse(format!(
            "header row '{}' names no ports",
            header[0]
        )));
    }

    let mut table: PoeTable = columns
        .iter()
        .map(|id| ((*id).to_string(), PortFields::new()))
        .collect();
    let mut off = vec![false; columns.len()];

    for row in rows {
        let (label, values) = row
            .split_first()
            .ok_or_else(|| AppError::Parse("empty row".to_string()))?;
        let field = label
            .strip_suffix(':')
            .ok_or_else(|| AppError::Parse(format!("row label '{label}' has no trailing ':'")))?;

        // Full-width rows still carry a token for ports that went off.
        let full_width = values.len() >= columns.len();
        let mut skipped = 0;

        for (column, device_id) in columns.iter().enumerate() {
            if off[column] {
                skipped += 1;
                continue;
            }
            let position = if full_width { column } else { column - skipped };
            let value = values.get(position).ok_or_else(|| {
                AppError::Parse(format!("row '{field}' has no value for port '{device_id}'"))
            })?;

            if let Some(record) = table.get_mut(*device_id) {
                record.insert(field.to_string(), (*value).to_string());
            }
            if field == fields::STATUS && *value != POWERED_ON {
                tracing::trace!("Port {} reported {}, skipping its column", device_id, value);
                off[column] = true;
            }
        }
    }

    Ok(table)
}
