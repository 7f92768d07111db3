//! Errors for a reindex run

use reqwest::StatusCode;
use swarm_reindex_schema::KeyError;
use thiserror::Error;

#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum ReindexError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid review listing: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Swarm returned HTTP {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("Review {id} has unknown state '{state}'")]
    UnknownState { id: u64, state: String },

    #[error("Invalid review id: {0}")]
    InvalidReviewId(#[from] KeyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReindexError {
    /// Whether the error belongs to a single review rather than the whole run.
    pub fn is_per_review(&self) -> bool {
        matches!(self, Self::UnknownState { .. } | Self::InvalidReviewId(_))
    }
}
