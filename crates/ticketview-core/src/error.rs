// Rust guideline compliant 2026-10-12

//! Error types for the Ticketview core library.

use thiserror::Error;

/// Result type alias for Ticketview operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Ticketview operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// IO error occurred while reading configuration.
    #[error("IO error: {0}")]
    Io(String),

    /// Page size must be a positive number.
    #[error("Invalid page size: {0} (must be greater than 0)")]
    InvalidPageSize(usize),

    /// Requested navigation is not legal from the current page.
    #[error("Transition rejected: {0}")]
    TransitionRejected(String),

    /// User input did not name any offered option.
    #[error("Not an option: {0:?}")]
    NotAnOption(String),

    /// Session event does not apply to the current session state.
    #[error("Invalid session event: {0}")]
    InvalidEvent(String),

    /// Configuration file or environment value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Required credentials are not configured.
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),
}

impl Error {
    /// Returns true for errors the caller should answer with a re-prompt.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::TransitionRejected(_) | Error::NotAnOption(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
