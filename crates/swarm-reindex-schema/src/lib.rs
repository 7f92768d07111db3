//! Shared types for swarm-reindex.
//!
//! Everything here is pure: the wire shape of a Swarm review listing, the
//! fixed table of hex-encoded state tokens, and the inverted index key a review
//! id maps to. Network and output concerns live in `swarm-reindex-core`.

pub mod key;
pub mod review;
pub mod state;

// Re-exports
pub use key::{KEY_PREFIX, KeyError, ReviewKey};
pub use review::{ReviewRecord, ReviewsEnvelope};
pub use state::{ReviewState, StateError, StateToken, token_for};
