// Rust guideline compliant 2026-10-12

//! One-line ticket summaries.

use crate::Ticket;
use chrono::{DateTime, Utc};

/// strftime pattern for creation times, e.g. `Fri Nov 26, 2021 at 05:22:43PM`.
pub const CREATED_AT_FORMAT: &str = "%a %b %d, %Y at %I:%M:%S%p";

/// Formats a timestamp the way ticket summaries display it.
#[must_use]
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(CREATED_AT_FORMAT).to_string()
}

/// Renders a ticket as `'subject' opened by requester on date`.
#[must_use]
pub fn format_summary(ticket: &Ticket) -> String {
    format!(
        "'{}' opened by {} on {}",
        ticket.subject,
        ticket.requester_id,
        format_timestamp(&ticket.created_at)
    )
}
