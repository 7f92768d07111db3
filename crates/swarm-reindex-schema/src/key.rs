//! Inverted review-id index keys.
//!
//! A key is `swarm-review-` followed by the 8-digit lowercase hex of
//! `0xFFFF_FFFF - id`. Inverting the id means that newer reviews (larger ids)
//! sort first when the index is scanned lexicographically.

use std::fmt;

use thiserror::Error;

/// Prefix shared by every review key in the index.
pub const KEY_PREFIX: &str = "swarm-review-";

/// Errors produced while deriving a [`ReviewKey`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    /// The id does not fit in the 32-bit key space.
    #[error("Review id {0} exceeds the 32-bit key space")]
    IdOutOfRange(u64),
}

/// Index key for a single review.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReviewKey(String);

impl ReviewKey {
    /// Derive the key for a review id.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::IdOutOfRange`] if `id` is larger than `u32::MAX`.
    pub fn from_id(id: u64) -> Result<Self, KeyError> {
        let id = u32::try_from(id).map_err(|_| KeyError::IdOutOfRange(id))?;
        Ok(Self(format!("{KEY_PREFIX}{:08x}", u32::MAX - id)))
    }

    /// Return the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReviewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ReviewKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
