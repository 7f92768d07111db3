//! swarm-reindex - index commands for open Swarm reviews
//!
//! Asks a Helix Swarm server for every open review (needing review, needing
//! revision, or approved with a pending revision) and prints one
//! `p4 index` command per review to stdout:
//!
//! ```text
//! echo 617070726F766564 |p4 index -a 1308 swarm-review-ffffff9b
//! ```
//!
//! Nothing is executed; pipe the output into a shell to apply it. All
//! diagnostics go to stderr.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use swarm_reindex_core::{Config, Credentials, DEFAULT_INDEX_ATTRIBUTE, UnknownStatePolicy};

#[derive(Debug, Parser)]
#[command(name = "swarm-reindex")]
#[command(
    author,
    version = env!("SWARM_REINDEX_VERSION"),
    about = "Print p4 index commands for open Swarm reviews"
)]
#[allow(missing_docs)]
pub struct Cli {
    /// Swarm base URL (e.g. https://swarm.example.com)
    #[arg(long, env = "SWARM_URL")]
    pub url: String,

    /// Swarm user for HTTP Basic auth
    #[arg(long, env = "SWARM_USER")]
    pub user: String,

    /// Password or ticket for HTTP Basic auth
    #[arg(long, env = "SWARM_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Request timeout in seconds
    #[arg(
        long,
        env = "SWARM_TIMEOUT",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Attribute number passed to `p4 index -a`
    #[arg(long, env = "SWARM_INDEX_ATTRIBUTE", default_value_t = DEFAULT_INDEX_ATTRIBUTE)]
    pub attribute: u32,

    /// What to do with a review whose state is not recognised
    #[arg(long, value_enum, default_value_t = UnknownStateArg::Abort)]
    pub on_unknown_state: UnknownStateArg,

    /// Exit successfully with no output when Swarm answers with a non-200 status
    #[arg(long)]
    pub ignore_http_errors: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[allow(missing_docs)]
pub enum UnknownStateArg {
    /// Stop at the first bad review (lines already printed are kept)
    Abort,
    /// Log the review to stderr and continue
    Skip,
}

impl From<UnknownStateArg> for UnknownStatePolicy {
    fn from(arg: UnknownStateArg) -> Self {
        match arg {
            UnknownStateArg::Abort => Self::Abort,
            UnknownStateArg::Skip => Self::Skip,
        }
    }
}

impl Cli {
    /// Convert parsed arguments into a run configuration.
    pub fn into_config(self) -> Config {
        Config {
            base_url: self.url,
            credentials: Credentials::new(self.user, self.password),
            timeout: Duration::from_secs(self.timeout),
            attribute: self.attribute,
            on_unknown_state: self.on_unknown_state.into(),
            ignore_http_errors: self.ignore_http_errors,
        }
    }
}
