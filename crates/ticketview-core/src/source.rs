// Rust guideline compliant 2026-10-12

//! The ticket fetching seam.
//!
//! The menu driver depends only on [`TicketSource`]; the HTTP client lives in
//! `ticketview-client` and tests substitute in-memory sources.

use crate::{Selector, Ticket};
use thiserror::Error;

/// Successful fetch result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    /// A single ticket, returned for `Selector::Id`.
    One(Ticket),
    /// An ordered list, returned for `Selector::All`.
    Many(Vec<Ticket>),
}

impl Fetched {
    /// Converts the result into a list, preserving order.
    #[must_use]
    pub fn into_tickets(self) -> Vec<Ticket> {
        match self {
            Fetched::One(ticket) => vec![ticket],
            Fetched::Many(tickets) => tickets,
        }
    }
}

/// Failure kinds reported by a ticket source.
///
/// The kind is decided where the failure happens, so callers never need to
/// inspect a response after the fact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No ticket exists for the selector.
    #[error("ticket not found")]
    NotFound,

    /// The API rejected the credentials.
    #[error("authentication failed")]
    Unauthorized,

    /// The API could not be reached.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The request did not complete in time.
    #[error("request timed out")]
    Timeout,

    /// The API answered with an unexpected status.
    #[error("HTTP error {status}")]
    Http {
        /// HTTP status code.
        status: u16,
    },

    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// Any other client failure.
    #[error("request failed: {0}")]
    Other(String),
}

impl FetchError {
    /// Returns the message shown to the user for this failure.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::NotFound => {
                "Oops! Could not find a ticket with that ID. Please try again..."
            }
            FetchError::Unauthorized => {
                "Oops! Could not authenticate you. Please make sure your email and token are correct and try again..."
            }
            FetchError::Connection(_) => {
                "Oops! Could not connect to the Tickets API. Please check your connection and try again...\nIf this continues to happen, then something is wrong on our side. Sorry for the inconvenience."
            }
            FetchError::Timeout => {
                "Oops! The request timed out. Please check your connection and try again..."
            }
            FetchError::Http { .. } | FetchError::Decode(_) | FetchError::Other(_) => {
                "Oops! Something went wrong. Please try again..."
            }
        }
    }
}

/// Anything that can produce tickets for a selector.
pub trait TicketSource {
    /// Fetches the tickets named by `selector`.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` describing why no tickets could be produced.
    fn fetch(&self, selector: &Selector) -> Result<Fetched, FetchError>;
}

impl<S: TicketSource + ?Sized> TicketSource for &S {
    fn fetch(&self, selector: &Selector) -> Result<Fetched, FetchError> {
        (**self).fetch(selector)
    }
}
