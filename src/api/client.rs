//! HTTP client for the party planner API.
//!
//! The API is consumed read-only: four GET endpoints under a fixed base
//! path plus cohort segment. The client sits behind the [`PartyApi`]
//! trait so loaders can be exercised against a stub in tests.
//!
//! No auth headers, no timeouts, no retries - retrying is just
//! re-invoking, every call is idempotent.

use std::fmt;

use async_trait::async_trait;
use log::{debug, warn};
use serde::de::DeserializeOwned;

use super::types::{Envelope, Guest, Party, Rsvp};

/// Errors that can occur while talking to the API.
///
/// The render cycle swallows all of these identically; the taxonomy
/// exists for the diagnostic log and for tests.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// The API returned a non-success status.
    Api { status: u16, message: String },
    /// The response body could not be decoded.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Read-only access to the party planner collections.
#[async_trait]
pub trait PartyApi: Send + Sync {
    /// GET the full events collection.
    async fn fetch_parties(&self) -> Result<Vec<Party>, ApiError>;

    /// GET one event by id.
    async fn fetch_party(&self, id: i64) -> Result<Party, ApiError>;

    /// GET the full rsvps collection. The server offers no filter by
    /// event; callers filter client-side.
    async fn fetch_rsvps(&self) -> Result<Vec<Rsvp>, ApiError>;

    /// GET the full guests collection.
    async fn fetch_guests(&self) -> Result<Vec<Guest>, ApiError>;
}

/// reqwest-backed [`PartyApi`] implementation.
pub struct HttpPartyApi {
    base_url: String,
    cohort: String,
    client: reqwest::Client,
}

impl HttpPartyApi {
    /// Creates a client scoped to one cohort's dataset.
    ///
    /// `base_url` must not end with a slash; `cohort` is the bare path
    /// segment (no slashes).
    pub fn new(base_url: String, cohort: String) -> Self {
        Self {
            base_url,
            cohort,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.cohort, path)
    }

    /// GETs `url` and decodes a `{ "data": T }` envelope.
    async fn get_enveloped<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("GET {url} -> {status}");

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("API error: {} - {}", status.as_u16(), message);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl PartyApi for HttpPartyApi {
    async fn fetch_parties(&self) -> Result<Vec<Party>, ApiError> {
        self.get_enveloped(self.url("events")).await
    }

    async fn fetch_party(&self, id: i64) -> Result<Party, ApiError> {
        self.get_enveloped(self.url(&format!("events/{id}"))).await
    }

    async fn fetch_rsvps(&self) -> Result<Vec<Rsvp>, ApiError> {
        self.get_enveloped(self.url("rsvps")).await
    }

    async fn fetch_guests(&self) -> Result<Vec<Guest>, ApiError> {
        self.get_enveloped(self.url("guests")).await
    }
}
