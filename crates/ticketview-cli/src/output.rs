// Rust guideline compliant 2026-10-13

//! Output formatting module for the Ticketview CLI.
//!
//! This module formats tickets for the non-interactive commands in various
//! output formats (plain text, table, JSON).

use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};
use ticketview_core::format::format_timestamp;
use ticketview_core::{format_summary, Paginator, Ticket};

/// Output formatter trait.
///
/// Defines the interface for formatting tickets in different output formats.
pub trait OutputFormatter {
    /// Formats a single ticket for display.
    fn format_ticket(&self, ticket: &Ticket) -> String;

    /// Formats the current page of a ticket list.
    fn format_page(&self, page: &Paginator<'_, Ticket>) -> String;

    /// Formats the message shown when there are no tickets.
    fn format_empty(&self) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

/// Plain text output formatter.
///
/// One summary line per ticket, as in the interactive viewer.
pub struct PlainFormatter {
    use_color: bool,
}

impl PlainFormatter {
    /// Creates a new plain formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether error messages are colored
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_ticket(&self, ticket: &Ticket) -> String {
        format_summary(ticket)
    }

    fn format_page(&self, page: &Paginator<'_, Ticket>) -> String {
        let state = page.state();
        let mut output = format!(
            "Page {} of {}\n-------------------------------------\n",
            state.current_page() + 1,
            state.total_pages()
        );

        for (offset, ticket) in page.current_items().iter().enumerate() {
            output.push_str(&format!(
                "{} {}\n",
                page.first_item_number() + offset,
                format_summary(ticket)
            ));
        }

        output
    }

    fn format_empty(&self) -> String {
        "No tickets found.".to_string()
    }

    fn format_error(&self, error: &str) -> String {
        colored_error(error, self.use_color)
    }
}

/// Table output formatter.
///
/// Formats tickets as aligned tables and key/value blocks.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether error messages are colored
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_ticket(&self, ticket: &Ticket) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:          {}\n", ticket.id));
        output.push_str(&format!("Subject:     {}\n", ticket.subject));
        if let Some(status) = &ticket.status {
            output.push_str(&format!("Status:      {}\n", status));
        }
        output.push_str(&format!("Requester:   {}\n", ticket.requester_id));
        output.push_str(&format!(
            "Created:     {}\n",
            format_timestamp(&ticket.created_at)
        ));
        if let Some(updated_at) = &ticket.updated_at {
            output.push_str(&format!("Updated:     {}\n", format_timestamp(updated_at)));
        }

        if !ticket.description.is_empty() {
            output.push_str(&format!("Description: {}\n", ticket.description));
        }

        output
    }

    fn format_page(&self, page: &Paginator<'_, Ticket>) -> String {
        let mut builder = Builder::default();
        builder.push_record(["#", "ID", "Subject", "Requester", "Created"]);

        for (offset, ticket) in page.current_items().iter().enumerate() {
            builder.push_record([
                (page.first_item_number() + offset).to_string(),
                ticket.id.to_string(),
                ticket.subject.clone(),
                ticket.requester_id.to_string(),
                format_timestamp(&ticket.created_at),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        let state = page.state();
        format!(
            "{}\nPage {} of {} ({} tickets)",
            table,
            state.current_page() + 1,
            state.total_pages(),
            state.total_items()
        )
    }

    fn format_empty(&self) -> String {
        "No tickets found.".to_string()
    }

    fn format_error(&self, error: &str) -> String {
        colored_error(error, self.use_color)
    }
}

/// JSON output formatter.
///
/// Formats tickets as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_ticket(&self, ticket: &Ticket) -> String {
        serde_json::to_string_pretty(ticket)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize ticket" }).to_string())
    }

    fn format_page(&self, page: &Paginator<'_, Ticket>) -> String {
        let state = page.state();
        let output = json!({
            "tickets": page.current_items(),
            "page": state.current_page() + 1,
            "total_pages": state.total_pages(),
            "total": state.total_items(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize ticket page" }).to_string())
    }

    fn format_empty(&self) -> String {
        json!({ "tickets": [], "page": 0, "total_pages": 0, "total": 0 }).to_string()
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

fn colored_error(error: &str, use_color: bool) -> String {
    if !use_color {
        return format!("Error: {}", error);
    }

    let mut buffer = Buffer::ansi();
    let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
    let _ = write!(buffer, "Error: ");
    let _ = buffer.reset();
    let _ = write!(buffer, "{}", error);
    String::from_utf8_lossy(buffer.as_slice()).to_string()
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("plain", "table", or "json")
/// * `use_color` - Whether to use colored output (ignored for JSON)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "table" => Box::new(TableFormatter::new(use_color)),
        _ => Box::new(PlainFormatter::new(use_color)),
    }
}
