// Rust guideline compliant 2026-10-12

//! Credential acquisition strategies.
//!
//! Credentials come from a [`CredentialSource`] chosen at startup, so the
//! client never embeds an email or token.

use crate::config::non_blank;
use crate::{Config, Error, Result};
use std::fmt;

/// Email and API token for basic token authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    token: String,
}

impl Credentials {
    /// Creates credentials after trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingCredentials` if either value is blank.
    pub fn new(email: &str, token: &str) -> Result<Self> {
        let email = email.trim();
        let token = token.trim();

        if email.is_empty() {
            return Err(Error::MissingCredentials("email is empty".to_string()));
        }
        if token.is_empty() {
            return Err(Error::MissingCredentials("token is empty".to_string()));
        }

        Ok(Self {
            email: email.to_string(),
            token: token.to_string(),
        })
    }

    /// Agent email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// API token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Basic-auth user name for token authentication (`email/token`).
    #[must_use]
    pub fn username(&self) -> String {
        format!("{}/token", self.email)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// A strategy for obtaining credentials.
pub trait CredentialSource {
    /// Produces credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if no usable credentials are available.
    fn credentials(&self) -> Result<Credentials>;
}

/// Reads credentials from loaded configuration.
#[derive(Debug, Clone, Copy)]
pub struct ConfigCredentials<'a> {
    config: &'a Config,
}

impl<'a> ConfigCredentials<'a> {
    /// Wraps a configuration.
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

impl CredentialSource for ConfigCredentials<'_> {
    fn credentials(&self) -> Result<Credentials> {
        let email = non_blank(self.config.email.as_deref()).ok_or_else(|| {
            Error::MissingCredentials("set TICKETVIEW_EMAIL or email in the config file".to_string())
        })?;
        let token = non_blank(self.config.token.as_deref()).ok_or_else(|| {
            Error::MissingCredentials("set TICKETVIEW_TOKEN or token in the config file".to_string())
        })?;

        Credentials::new(email, token)
    }
}
