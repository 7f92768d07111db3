//! Wire shape of the Swarm review listing.

use serde::{Deserialize, Serialize};

use crate::key::{KeyError, ReviewKey};
use crate::state::{ReviewState, StateError};

/// A single review as returned by `GET /api/v9/reviews?fields=id,state,pending`.
///
/// `state` is kept as the raw string so that an unrecognised value fails on
/// its own entry instead of failing the whole response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Review id assigned by Swarm.
    pub id: u64,

    /// Raw state name (e.g. `needsReview`).
    pub state: String,

    /// Whether the review has a pending (unintegrated) revision.
    pub pending: bool,
}

impl ReviewRecord {
    /// Derive this review's index key.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::IdOutOfRange`] if the id exceeds `u32::MAX`.
    pub fn key(&self) -> Result<ReviewKey, KeyError> {
        ReviewKey::from_id(self.id)
    }

    /// Parse the raw state name.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Unknown`] for a state outside the token table.
    pub fn parsed_state(&self) -> Result<ReviewState, StateError> {
        self.state.parse()
    }
}

/// Top-level body of the review listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewsEnvelope {
    /// Reviews matching the query, in server order.
    pub reviews: Vec<ReviewRecord>,
}
