// Rust guideline compliant 2026-10-13

//! Ticketview HTTP client.
//!
//! Implements [`ticketview_core::TicketSource`] on top of the helpdesk
//! "requests" REST API using a blocking `reqwest` client.

pub mod client;
pub mod types;

pub use client::HelpdeskClient;
