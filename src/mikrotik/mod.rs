//! `MikroTik` PoE monitoring over the device console
//!
//! This module runs `/interface/ethernet/poe/monitor` on the device through a
//! [`Transport`], parses the printed table, and tracks whether a poll is in
//! flight.

mod parse;
mod poller;
mod ssh;
#[cfg(test)]
pub(crate) mod testing;
mod types;

// Re-export public types and functions
pub use parse::parse_poe_table;
pub use poller::{GroupPoller, PollState, monitor_command};
pub use ssh::{SshTransport, Transport};
pub use types::{CommandOutput, POWERED_ON, PoeTable, PortFields, PortRecord, fields};
