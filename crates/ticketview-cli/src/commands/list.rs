// Rust guideline compliant 2026-10-13

//! Implementation of the `tv list` command.
//!
//! Prints a single page of all tickets without prompting.

use super::show::user_error;
use crate::OutputFormatter;
use anyhow::{bail, Result};
use ticketview_core::{Paginator, Selector, TicketSource, Transition};

/// Lists one page of tickets.
///
/// # Arguments
///
/// * `source` - Where tickets are fetched from
/// * `page` - One-based page number
/// * `page_size` - Tickets per page
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if the tickets cannot be fetched or the page does not exist.
pub fn execute(
    source: &dyn TicketSource,
    page: usize,
    page_size: usize,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    println!("{}", render(source, page, page_size, formatter)?);
    Ok(())
}

/// Renders one page of tickets without printing it.
///
/// # Errors
///
/// Returns an error if the tickets cannot be fetched or the page does not exist.
pub fn render(
    source: &dyn TicketSource,
    page: usize,
    page_size: usize,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let tickets = source.fetch(&Selector::All).map_err(user_error)?.into_tickets();

    let Some(mut paginator) = Paginator::new(&tickets, page_size)? else {
        return Ok(formatter.format_empty());
    };

    let total_pages = paginator.state().total_pages();
    if page == 0 || page > total_pages {
        bail!("Page {} does not exist (1-{})", page, total_pages);
    }

    for _ in 1..page {
        paginator.apply(Transition::Next)?;
    }

    Ok(formatter.format_page(&paginator))
}
