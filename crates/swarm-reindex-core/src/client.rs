//! Swarm API client.
//!
//! Exactly one request per run: `GET /api/v9/reviews` with HTTP Basic auth.
//! Only a `200` is decoded; every other status comes back as
//! [`FetchOutcome::HttpStatus`] so the caller decides whether it is fatal.

use reqwest::{Client, StatusCode};
use swarm_reindex_schema::{ReviewRecord, ReviewsEnvelope};
use tracing::debug;

use crate::config::{Config, Credentials};
use crate::error::ReindexError;
use crate::query;

/// Result of the listing request.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The server answered `200` and the body decoded.
    Reviews(Vec<ReviewRecord>),
    /// The server answered with any other status.
    HttpStatus {
        /// Status returned by Swarm.
        status: StatusCode,
        /// Response body, for diagnostics. Empty if it could not be read.
        body: String,
    },
}

/// Thin wrapper around a `reqwest::Client` bound to one Swarm server.
#[derive(Debug, Clone)]
pub struct SwarmClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
}

impl SwarmClient {
    /// Build a client with the configured timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`ReindexError::Http`] if the TLS backend cannot be initialised.
    pub fn new(config: &Config) -> Result<Self, ReindexError> {
        let http = Client::builder()
            .user_agent(crate::USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(Self::with_client(
            http,
            config.base_url.clone(),
            config.credentials.clone(),
        ))
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(http: Client, base_url: String, credentials: Credentials) -> Self {
        Self {
            http,
            base_url,
            credentials,
        }
    }

    /// URL of the open-reviews listing on this server.
    pub fn reviews_url(&self) -> String {
        query::reviews_url(&self.base_url)
    }

    /// Fetch reviews that are open: needing review, needing revision, or
    /// approved with a pending revision.
    ///
    /// # Errors
    ///
    /// Returns [`ReindexError::Http`] on connection, TLS or timeout failures and
    /// [`ReindexError::Decode`] if a `200` body is not a review listing.
    pub async fn fetch_open_reviews(&self) -> Result<FetchOutcome, ReindexError> {
        let url = self.reviews_url();
        debug!(%url, user = %self.credentials.user, "Fetching open reviews");

        let resp = self
            .http
            .get(&url)
            .basic_auth(&self.credentials.user, Some(&self.credentials.password))
            .send()
            .await?;

        let status = resp.status();
        debug!(%status, "Swarm responded");

        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Ok(FetchOutcome::HttpStatus { status, body });
        }

        let bytes = resp.bytes().await?;
        let envelope: ReviewsEnvelope = serde_json::from_slice(&bytes)?;
        debug!(count = envelope.reviews.len(), "Decoded review listing");

        Ok(FetchOutcome::Reviews(envelope.reviews))
    }
}
