//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::navigator::Navigator;
use crate::core::route_table::RouteTable;

/// The built-in HRMS route table, shared.
pub fn test_table() -> Arc<RouteTable> {
    Arc::new(RouteTable::builtin())
}

/// A navigator on the built-in table, parked on the dashboard.
pub fn test_navigator() -> Navigator {
    Navigator::initialize(test_table(), "dashboard").unwrap()
}

/// Flatten a `TestBackend` buffer into one string for `contains` checks.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
