//! swarm-reindex core
//!
//! One run is: build the open-reviews query, issue a single authenticated GET
//! against Swarm, then write one `p4 index` command per review.
//!
//! ```text
//! Config ──▶ SwarmClient::fetch_open_reviews ──▶ FetchOutcome
//!                                                    │
//!                    stdout ◀── emit_commands ◀──────┘
//! ```

pub mod client;
pub mod command;
pub mod config;
pub mod emit;
pub mod error;
pub mod query;

use std::io::Write;

use tracing::{error, warn};

pub use client::{FetchOutcome, SwarmClient};
pub use command::{DEFAULT_INDEX_ATTRIBUTE, IndexCommand};
pub use config::{Config, Credentials};
pub use emit::{EmitSummary, UnknownStatePolicy, emit_commands};
pub use error::ReindexError;

/// User Agent string sent with the Swarm request
pub const USER_AGENT: &str = concat!("swarm-reindex/", env!("CARGO_PKG_VERSION"));

/// Fetch the open reviews and write their index commands to `out`.
///
/// A non-200 response is an error unless `config.ignore_http_errors` is set,
/// in which case it is logged and nothing is written.
///
/// # Errors
///
/// Returns [`ReindexError`] on network failure, an undecodable body, a
/// non-200 status (unless ignored), a failed write, or a review that cannot
/// be rendered under [`UnknownStatePolicy::Abort`]. Lines written before the
/// failure stay written.
pub async fn run<W: Write>(config: &Config, out: &mut W) -> Result<EmitSummary, ReindexError> {
    let client = SwarmClient::new(config)?;

    match client.fetch_open_reviews().await? {
        FetchOutcome::Reviews(reviews) => {
            emit_commands(&reviews, config.attribute, config.on_unknown_state, out)
        }
        FetchOutcome::HttpStatus { status, body } => {
            if config.ignore_http_errors {
                warn!(%status, "Swarm returned a non-200 status, no commands emitted");
                return Ok(EmitSummary::default());
            }
            error!(%status, %body, "Swarm returned a non-200 status");
            Err(ReindexError::UnexpectedStatus { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use std::time::Duration;

    fn config(url: String) -> Config {
        Config {
            base_url: url,
            credentials: Credentials::new("reg", "reg"),
            timeout: Duration::from_secs(5),
            attribute: DEFAULT_INDEX_ATTRIBUTE,
            on_unknown_state: UnknownStatePolicy::Abort,
            ignore_http_errors: false,
        }
    }

    #[tokio::test]
    async fn test_run_prints_one_line_per_review() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/api/v9/reviews")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"reviews": [{"id": 100, "state": "approved", "pending": true}]}"#)
            .create_async()
            .await;

        let mut out = Vec::new();
        let summary = run(&config(server.url()), &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "echo 617070726F766564 |p4 index -a 1308 swarm-review-ffffff9b\n"
        );
        assert_eq!(summary.emitted, 1);
    }

    #[tokio::test]
    async fn test_run_empty_listing() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/api/v9/reviews")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"reviews": []}"#)
            .create_async()
            .await;

        let mut out = Vec::new();
        let summary = run(&config(server.url()), &mut out).await.unwrap();

        assert!(out.is_empty());
        assert_eq!(summary, EmitSummary::default());
    }

    #[tokio::test]
    async fn test_run_fails_on_server_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/api/v9/reviews")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let mut out = Vec::new();
        let err = run(&config(server.url()), &mut out).await.unwrap_err();

        match err {
            ReindexError::UnexpectedStatus { status, body } => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_run_can_ignore_http_errors() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/api/v9/reviews")
            .match_query(mockito::Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let mut cfg = config(server.url());
        cfg.ignore_http_errors = true;

        let mut out = Vec::new();
        let summary = run(&cfg, &mut out).await.unwrap();

        assert!(out.is_empty());
        assert_eq!(summary, EmitSummary::default());
    }

    #[tokio::test]
    async fn test_run_keeps_partial_output_on_unknown_state() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/api/v9/reviews")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{"reviews": [
                    {"id": 100, "state": "approved", "pending": true},
                    {"id": 1, "state": "unknown", "pending": false},
                    {"id": 2, "state": "archived", "pending": false}
                ]}"#,
            )
            .create_async()
            .await;

        let mut out = Vec::new();
        let err = run(&config(server.url()), &mut out).await.unwrap_err();

        assert!(matches!(err, ReindexError::UnknownState { id: 1, .. }));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "echo 617070726F766564 |p4 index -a 1308 swarm-review-ffffff9b\n"
        );
    }
}
