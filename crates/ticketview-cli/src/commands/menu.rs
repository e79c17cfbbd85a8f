// Rust guideline compliant 2026-10-13

//! Implementation of the interactive `tv menu` command.

use crate::menu::MenuDriver;
use anyhow::Result;
use std::io;
use ticketview_core::TicketSource;

/// Runs the interactive menu on stdin and stdout.
///
/// # Arguments
///
/// * `source` - Where tickets are fetched from
/// * `page_size` - Tickets shown per page
///
/// # Errors
///
/// Returns an error if the terminal streams fail.
pub fn execute(source: &dyn TicketSource, page_size: usize) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    MenuDriver::new(source, stdin.lock(), stdout.lock(), page_size).run()
}
