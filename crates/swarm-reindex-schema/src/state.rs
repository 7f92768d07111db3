//! Review states and their `p4 index` tokens.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised when a state name is not one Swarm is known to report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The state string does not match any entry in the token table.
    #[error("Unknown review state: '{0}'")]
    Unknown(String),
}

/// A review state as reported by the Swarm API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewState {
    /// `approved`
    Approved,
    /// `needsReview`
    NeedsReview,
    /// `needsRevision`
    NeedsRevision,
    /// `archived`
    Archived,
}

impl ReviewState {
    /// Every state with a token, in table order.
    pub const ALL: [Self; 4] = [
        Self::Approved,
        Self::NeedsReview,
        Self::NeedsRevision,
        Self::Archived,
    ];

    /// The wire name Swarm uses for this state.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::NeedsReview => "needsReview",
            Self::NeedsRevision => "needsRevision",
            Self::Archived => "archived",
        }
    }

    /// The hex-encoded ASCII of the state name.
    ///
    /// These are literals rather than computed values; the downstream index
    /// stores them as opaque payloads and they must never drift.
    pub const fn token(self) -> StateToken {
        match self {
            Self::Approved => StateToken("617070726F766564"),
            Self::NeedsReview => StateToken("6E65656473526576696577"),
            Self::NeedsRevision => StateToken("6E656564735265766973696F6E"),
            Self::Archived => StateToken("6172636869766564"),
        }
    }
}

impl FromStr for ReviewState {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| StateError::Unknown(s.to_string()))
    }
}

impl fmt::Display for ReviewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uppercase hex token identifying a review state in the search index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateToken(&'static str);

impl StateToken {
    /// Return the token as a string slice.
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for StateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for StateToken {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Look up the token for a raw state name.
///
/// # Errors
///
/// Returns [`StateError::Unknown`] if `state` is not one of the four known
/// state names. Matching is case-sensitive.
pub fn token_for(state: &str) -> Result<StateToken, StateError> {
    state.parse::<ReviewState>().map(ReviewState::token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_decode_to_state_names() {
        for state in ReviewState::ALL {
            let bytes = hex::decode(state.token().as_str()).unwrap();
            assert_eq!(String::from_utf8(bytes).unwrap(), state.as_str());
        }
    }

    #[test]
    fn test_tokens_are_uppercase_hex() {
        for state in ReviewState::ALL {
            let token = state.token().as_str();
            assert_eq!(token, hex::encode_upper(state.as_str()));
        }
    }

    #[test]
    fn test_approved_token() {
        assert_eq!(token_for("approved").unwrap().as_str(), "617070726F766564");
    }

    #[test]
    fn test_parse_round_trips_wire_names() {
        for state in ReviewState::ALL {
            assert_eq!(state.as_str().parse::<ReviewState>().unwrap(), state);
            assert_eq!(state.to_string(), state.as_str());
        }
    }

    #[test]
    fn test_unknown_state_is_rejected() {
        assert_eq!(
            token_for("unknown"),
            Err(StateError::Unknown("unknown".to_string()))
        );
        // Swarm's names are camelCase; nothing is normalised
        assert!(token_for("NeedsReview").is_err());
        assert!(token_for("").is_err());
    }

    #[test]
    fn test_pending_filter_is_not_a_state() {
        assert!(token_for("approved:isPending").is_err());
    }
}
