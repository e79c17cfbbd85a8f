// Rust guideline compliant 2026-10-13

//! Command implementations for the Ticketview CLI.

use crate::OutputFormatter;

pub mod list;
pub mod menu;
pub mod show;

/// Renders a command failure with the selected output formatter.
pub fn render_error(formatter: &dyn OutputFormatter, err: &anyhow::Error) -> String {
    formatter.format_error(&format!("{:#}", err))
}
