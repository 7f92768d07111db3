//! Run configuration.
//!
//! Built by the binary from flags and environment; the core never reads the
//! environment itself.

use std::fmt;
use std::time::Duration;

use crate::command::DEFAULT_INDEX_ATTRIBUTE;
use crate::emit::UnknownStatePolicy;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP Basic credentials for the Swarm API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Swarm (Perforce) user name.
    pub user: String,
    /// Password or ticket.
    pub password: String,
}

impl Credentials {
    /// Create credentials from a user and password.
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }
}

// Keep the password out of logs and panic messages
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Everything a single run needs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Swarm base URL, e.g. `https://swarm.example.com`.
    pub base_url: String,
    /// Basic auth credentials.
    pub credentials: Credentials,
    /// Timeout for the whole request.
    pub timeout: Duration,
    /// `p4 index -a` attribute the tokens are indexed under.
    pub attribute: u32,
    /// What to do with a review whose state or id cannot be rendered.
    pub on_unknown_state: UnknownStatePolicy,
    /// Treat a non-200 response as an empty listing instead of an error.
    pub ignore_http_errors: bool,
}

impl Config {
    /// Create a config with default timeout, attribute and policies.
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
            timeout: DEFAULT_TIMEOUT,
            attribute: DEFAULT_INDEX_ATTRIBUTE,
            on_unknown_state: UnknownStatePolicy::default(),
            ignore_http_errors: false,
        }
    }
}
