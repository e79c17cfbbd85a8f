// Rust guideline compliant 2026-10-13

//! Implementation of the `tv show` command.
//!
//! Fetches a single ticket and prints it with the selected formatter.

use crate::OutputFormatter;
use anyhow::Result;
use ticketview_core::{FetchError, Fetched, Selector, TicketSource};

/// Shows one ticket by ID.
///
/// # Arguments
///
/// * `source` - Where tickets are fetched from
/// * `id` - The ticket ID
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if the ID is blank or the ticket cannot be fetched.
pub fn execute(source: &dyn TicketSource, id: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    println!("{}", render(source, id, formatter)?);
    Ok(())
}

/// Renders one ticket without printing it.
///
/// # Errors
///
/// Returns the user-facing fetch message as the error.
pub fn render(source: &dyn TicketSource, id: &str, formatter: &dyn OutputFormatter) -> Result<String> {
    let selector = Selector::id(id).ok_or(FetchError::NotFound).map_err(user_error)?;

    let output = match source.fetch(&selector).map_err(user_error)? {
        Fetched::One(ticket) => formatter.format_ticket(&ticket),
        Fetched::Many(tickets) => tickets
            .iter()
            .map(|ticket| formatter.format_ticket(ticket))
            .collect::<Vec<_>>()
            .join("\n"),
    };

    Ok(output)
}

pub(crate) fn user_error(err: FetchError) -> anyhow::Error {
    tracing::warn!(error = %err, "fetch failed");
    anyhow::anyhow!("{}", err.user_message())
}
