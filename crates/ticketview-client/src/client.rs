// Rust guideline compliant 2026-10-13

//! Blocking HTTP client for the helpdesk requests API.

use crate::types::{RequestEnvelope, RequestList};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use ticketview_core::{Config, Credentials, FetchError, Fetched, Selector, Ticket, TicketSource};
use tracing::{debug, warn};
use url::Url;

/// HTTP client for the helpdesk requests API.
#[derive(Debug, Clone)]
pub struct HelpdeskClient {
    http: Client,
    base_url: Url,
    credentials: Credentials,
    max_pages: usize,
}

impl HelpdeskClient {
    /// Creates a client from configuration and credentials.
    ///
    /// # Arguments
    ///
    /// * `config` - Validated configuration (base URL, timeout, page cap)
    /// * `credentials` - Email and API token
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Other` if the base URL cannot be resolved or the
    /// HTTP client cannot be built.
    pub fn new(config: &Config, credentials: Credentials) -> Result<Self, FetchError> {
        let base_url = config
            .api_base_url()
            .map_err(|err| FetchError::Other(err.to_string()))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("ticketview/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| FetchError::Other(err.to_string()))?;

        Ok(Self {
            http,
            base_url,
            credentials,
            max_pages: config.max_api_pages.max(1),
        })
    }

    /// Returns the API base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the ticket list endpoint.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Other` if the base URL cannot carry a path.
    pub fn requests_url(&self) -> Result<Url, FetchError> {
        self.endpoint(&[])
    }

    /// URL of a single ticket. The ID is percent-encoded as one path segment.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Other` if the base URL cannot carry a path.
    pub fn request_url(&self, id: &str) -> Result<Url, FetchError> {
        self.endpoint(&[id])
    }

    fn endpoint(&self, extra: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Other(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(["api", "v2", "requests"])
            .extend(extra);
        Ok(url)
    }

    /// Fetches every ticket, following `next_page` links.
    ///
    /// At most `max_api_pages` API pages are requested; further pages are
    /// skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns the first failure encountered; partial results are discarded.
    /// A `next_page` link to a different origin is `FetchError::Other`.
    pub fn fetch_all(&self) -> Result<Vec<Ticket>, FetchError> {
        let mut tickets = Vec::new();
        let mut next = Some(self.requests_url()?);
        let mut pages = 0;

        while let Some(url) = next.take() {
            if pages == self.max_pages {
                warn!(
                    max_pages = self.max_pages,
                    fetched = tickets.len(),
                    "stopping at API page limit"
                );
                break;
            }

            let page: RequestList = self.get(url)?;
            pages += 1;
            debug!(
                page = pages,
                received = page.requests.len(),
                count = ?page.count,
                "received ticket page"
            );
            tickets.extend(page.requests);

            next = match page.next_page {
                Some(raw) => Some(self.next_page_url(&raw)?),
                None => None,
            };
        }

        Ok(tickets)
    }

    /// Parses a `next_page` link. Credentials are only ever sent to the
    /// configured origin, so links to any other origin are refused.
    fn next_page_url(&self, raw: &str) -> Result<Url, FetchError> {
        let url = Url::parse(raw).map_err(|err| FetchError::Decode(format!("next_page: {err}")))?;
        if url.origin() != self.base_url.origin() {
            warn!(next_page = %url, "next_page leaves the configured API host");
            return Err(FetchError::Other(format!(
                "next_page {} is outside {}",
                url,
                self.base_url.origin().ascii_serialization()
            )));
        }
        Ok(url)
    }

    /// Fetches one ticket by ID.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::NotFound` for a blank ID without sending a request,
    /// otherwise any failure reported by the API.
    pub fn fetch_one(&self, id: &str) -> Result<Ticket, FetchError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(FetchError::NotFound);
        }

        let envelope: RequestEnvelope = self.get(self.request_url(id)?)?;
        Ok(envelope.request)
    }

    fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        debug!(url = %url, "GET");

        let resp = self
            .http
            .get(url)
            .basic_auth(self.credentials.username(), Some(self.credentials.token()))
            .send()
            .map_err(classify)?;

        let status = resp.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "request failed");
            return Err(status_error(status));
        }

        let body = resp.text().map_err(classify)?;
        serde_json::from_str(&body).map_err(|err| FetchError::Decode(err.to_string()))
    }
}

impl TicketSource for HelpdeskClient {
    fn fetch(&self, selector: &Selector) -> Result<Fetched, FetchError> {
        match selector {
            Selector::All => self.fetch_all().map(Fetched::Many),
            Selector::Id(id) => self.fetch_one(id).map(Fetched::One),
        }
    }
}

/// Maps a non-success status to a failure kind.
#[must_use]
pub fn status_error(status: StatusCode) -> FetchError {
    match status {
        StatusCode::UNAUTHORIZED => FetchError::Unauthorized,
        StatusCode::NOT_FOUND => FetchError::NotFound,
        other => FetchError::Http {
            status: other.as_u16(),
        },
    }
}

fn classify(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else if err.is_connect() {
        FetchError::Connection(err.to_string())
    } else if err.is_decode() || err.is_body() {
        FetchError::Decode(err.to_string())
    } else {
        FetchError::Other(err.to_string())
    }
}
