//! Writing index commands for a batch of reviews.

use std::io::Write;

use swarm_reindex_schema::ReviewRecord;
use tracing::{debug, warn};

use crate::command::IndexCommand;
use crate::error::ReindexError;

/// What to do when a review cannot be rendered (unknown state or an id
/// outside the key space).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownStatePolicy {
    /// Stop at the first bad review. Lines already written are kept.
    #[default]
    Abort,
    /// Log the review, skip it and keep going.
    Skip,
}

/// Counts for a completed batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitSummary {
    /// Commands written.
    pub emitted: usize,
    /// Reviews skipped under [`UnknownStatePolicy::Skip`].
    pub skipped: usize,
}

/// Write one command line per review to `out`, in listing order.
///
/// Each line is flushed as soon as it is written so that an abort part way
/// through leaves every earlier line visible downstream.
///
/// # Errors
///
/// Returns the first per-review error under [`UnknownStatePolicy::Abort`], or
/// [`ReindexError::Io`] if writing fails.
pub fn emit_commands<W: Write>(
    reviews: &[ReviewRecord],
    attribute: u32,
    policy: UnknownStatePolicy,
    out: &mut W,
) -> Result<EmitSummary, ReindexError> {
    let mut summary = EmitSummary::default();

    for review in reviews {
        debug!(
            id = review.id,
            state = %review.state,
            pending = review.pending,
            "Rendering review"
        );

        let command = match IndexCommand::for_review(review, attribute) {
            Ok(command) => command,
            Err(err) if policy == UnknownStatePolicy::Skip && err.is_per_review() => {
                warn!(id = review.id, error = %err, "Skipping review");
                summary.skipped += 1;
                continue;
            }
            Err(err) => return Err(err),
        };

        writeln!(out, "{command}")?;
        out.flush()?;
        summary.emitted += 1;
    }

    Ok(summary)
}
