// Rust guideline compliant 2026-10-12

//! Core data models for Ticketview.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A support request as returned by the helpdesk API.
///
/// Unknown fields in the API payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Numeric ticket identifier.
    pub id: u64,
    /// One-line subject of the request.
    pub subject: String,
    /// Free-form request body.
    #[serde(default)]
    pub description: String,
    /// Workflow status reported by the API (e.g. "open", "solved").
    #[serde(default)]
    pub status: Option<String>,
    /// Identifier of the user who opened the request.
    pub requester_id: u64,
    /// Creation time (ISO-8601 with zone designator).
    pub created_at: DateTime<Utc>,
    /// Time of the last update, if reported.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Identifies which tickets to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Every ticket visible to the authenticated user.
    All,
    /// A single ticket by its identifier.
    Id(String),
}

impl Selector {
    /// Builds a single-ticket selector from raw user input.
    ///
    /// # Arguments
    ///
    /// * `input` - The ticket ID as typed by the user
    ///
    /// # Returns
    ///
    /// `Some(Selector::Id)` with the trimmed ID, or `None` if the input is blank.
    pub fn id(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Selector::Id(trimmed.to_string()))
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => write!(f, "all"),
            Selector::Id(id) => write!(f, "{}", id),
        }
    }
}
