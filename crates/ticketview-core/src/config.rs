// Rust guideline compliant 2026-10-12

//! Configuration management for Ticketview.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use url::Url;

/// File name probed in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "ticketview.toml";

/// Configuration for the helpdesk client.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Helpdesk subdomain, expanded to `https://{subdomain}.zendesk.com`.
    #[serde(default)]
    pub subdomain: Option<String>,

    /// Full API base URL; takes precedence over `subdomain`.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Agent email used for token authentication.
    #[serde(default)]
    pub email: Option<String>,

    /// API token.
    #[serde(default)]
    pub token: Option<String>,

    /// Tickets shown per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of API result pages followed when listing all tickets.
    #[serde(default = "default_max_api_pages")]
    pub max_api_pages: usize,

    /// Log level (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_page_size() -> usize {
    25
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_api_pages() -> usize {
    10
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subdomain: None,
            base_url: None,
            email: None,
            token: None,
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
            max_api_pages: default_max_api_pages(),
            log_level: default_log_level(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("subdomain", &self.subdomain)
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("page_size", &self.page_size)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_api_pages", &self.max_api_pages)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The file at `path`, or `ticketview.toml` in the working directory if present
    /// 3. Environment variables with `TICKETVIEW_` prefix
    ///
    /// The result is not validated. Callers apply their own overrides first
    /// and then call [`Config::validate`].
    ///
    /// # Arguments
    ///
    /// * `path` - Optional explicit configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit configuration file does not exist or cannot be read
    /// - The configuration file contains invalid TOML
    /// - An environment variable has an invalid value
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    tracing::debug!("no config file found, using defaults");
                    Self::default()
                }
            }
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Reads a configuration file without applying overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "reading config file");
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::InvalidConfig(format!("{}: {}", path.display(), e)))
    }

    /// Applies environment variable overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup.
    ///
    /// Supported keys:
    /// - `TICKETVIEW_SUBDOMAIN` - Helpdesk subdomain
    /// - `TICKETVIEW_BASE_URL` - Full API base URL
    /// - `TICKETVIEW_EMAIL` - Agent email
    /// - `TICKETVIEW_TOKEN` - API token
    /// - `TICKETVIEW_PAGE_SIZE` - Tickets per page
    /// - `TICKETVIEW_TIMEOUT_SECS` - Request timeout in seconds
    /// - `TICKETVIEW_MAX_API_PAGES` - Result pages followed when listing
    /// - `TICKETVIEW_LOG_LEVEL` - Log level
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric value cannot be parsed.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("TICKETVIEW_SUBDOMAIN") {
            self.subdomain = Some(val);
        }

        if let Some(val) = lookup("TICKETVIEW_BASE_URL") {
            self.base_url = Some(val);
        }

        if let Some(val) = lookup("TICKETVIEW_EMAIL") {
            self.email = Some(val);
        }

        if let Some(val) = lookup("TICKETVIEW_TOKEN") {
            self.token = Some(val);
        }

        if let Some(val) = lookup("TICKETVIEW_PAGE_SIZE") {
            self.page_size = val.trim().parse().map_err(|_| {
                Error::InvalidConfig("TICKETVIEW_PAGE_SIZE must be a positive number".to_string())
            })?;
        }

        if let Some(val) = lookup("TICKETVIEW_TIMEOUT_SECS") {
            self.timeout_secs = val.trim().parse().map_err(|_| {
                Error::InvalidConfig(
                    "TICKETVIEW_TIMEOUT_SECS must be a positive number".to_string(),
                )
            })?;
        }

        if let Some(val) = lookup("TICKETVIEW_MAX_API_PAGES") {
            self.max_api_pages = val.trim().parse().map_err(|_| {
                Error::InvalidConfig(
                    "TICKETVIEW_MAX_API_PAGES must be a positive number".to_string(),
                )
            })?;
        }

        if let Some(val) = lookup("TICKETVIEW_LOG_LEVEL") {
            self.log_level = val;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// Credentials are not checked here; they may still be supplied
    /// interactively.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - page_size, timeout_secs or max_api_pages is zero
    /// - base_url is set but not a valid http(s) URL
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::InvalidPageSize(self.page_size));
        }

        if self.timeout_secs == 0 {
            return Err(Error::InvalidConfig(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.max_api_pages == 0 {
            return Err(Error::InvalidConfig(
                "max_api_pages must be greater than 0".to_string(),
            ));
        }

        if let Some(base_url) = non_blank(self.base_url.as_deref()) {
            parse_base_url(base_url)?;
        }

        Ok(())
    }

    /// Resolves the API base URL from `base_url` or `subdomain`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither is set or the result is not a valid URL.
    pub fn api_base_url(&self) -> Result<Url> {
        if let Some(base_url) = non_blank(self.base_url.as_deref()) {
            return parse_base_url(base_url);
        }

        match non_blank(self.subdomain.as_deref()) {
            Some(subdomain) => parse_base_url(&format!("https://{}.zendesk.com", subdomain)),
            None => Err(Error::InvalidConfig(
                "either subdomain or base_url must be set".to_string(),
            )),
        }
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))
    }
}

/// Returns the value if it contains anything other than whitespace.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| Error::InvalidConfig(format!("Invalid base_url {:?}: {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::InvalidConfig(format!(
            "base_url must use http or https, got {}",
            other
        ))),
    }
}
