//! Rendering of `p4 index` command lines.

use std::fmt;

use swarm_reindex_schema::{ReviewKey, ReviewRecord, StateToken, token_for};

use crate::error::ReindexError;

/// Attribute number the review-state tokens are indexed under.
pub const DEFAULT_INDEX_ATTRIBUTE: u32 = 1308;

/// One shell command that indexes a review's state token under its key.
///
/// Renders as `echo <token> |p4 index -a <attribute> <key>`. The command is
/// printed for an operator or a shell pipe; it is never executed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexCommand {
    /// Hex token of the review state.
    pub token: StateToken,
    /// `p4 index -a` attribute.
    pub attribute: u32,
    /// Inverted review-id key.
    pub key: ReviewKey,
}

impl IndexCommand {
    /// Build the command for a review.
    ///
    /// # Errors
    ///
    /// Returns [`ReindexError::InvalidReviewId`] if the id does not fit the key
    /// space, or [`ReindexError::UnknownState`] if the state has no token.
    pub fn for_review(review: &ReviewRecord, attribute: u32) -> Result<Self, ReindexError> {
        let key = review.key()?;
        let token = token_for(&review.state).map_err(|_| ReindexError::UnknownState {
            id: review.id,
            state: review.state.clone(),
        })?;

        Ok(Self {
            token,
            attribute,
            key,
        })
    }
}

impl fmt::Display for IndexCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "echo {} |p4 index -a {} {}",
            self.token, self.attribute, self.key
        )
    }
}
