// Rust guideline compliant 2026-10-12

//! Ticketview Core Library
//!
//! This crate provides the foundational components for the Ticketview helpdesk client:
//! - Data models (Ticket, Selector)
//! - Pagination engine (page math, navigation transitions)
//! - Session FSM (menu, paginating, exiting)
//! - Ticket summary formatting
//! - Configuration and credential strategies
//! - The `TicketSource` seam and error types

pub mod config;
pub mod credentials;
pub mod error;
pub mod format;
pub mod models;
pub mod pagination;
pub mod session;
pub mod source;

pub use config::Config;
pub use credentials::{ConfigCredentials, CredentialSource, Credentials};
pub use error::{Error, Result};
pub use format::format_summary;
pub use models::{Selector, Ticket};
pub use pagination::{available_transitions, items_for_page, page_count, PageState, Paginator, Step, Transition};
pub use session::{MenuChoice, SessionEvent, SessionState};
pub use source::{FetchError, Fetched, TicketSource};
