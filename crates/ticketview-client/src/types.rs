// Rust guideline compliant 2026-10-13

//! Response envelopes of the requests API.

use serde::Deserialize;
use ticketview_core::Ticket;

/// Body of `GET /api/v2/requests`.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestList {
    /// Tickets on this API page, in response order.
    pub requests: Vec<Ticket>,
    /// Absolute URL of the next API page, if any.
    #[serde(default)]
    pub next_page: Option<String>,
    /// Total number of tickets reported by the API.
    #[serde(default)]
    pub count: Option<u64>,
}

/// Body of `GET /api/v2/requests/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestEnvelope {
    /// The requested ticket.
    pub request: Ticket,
}
