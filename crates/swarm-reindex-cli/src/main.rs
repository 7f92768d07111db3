//! swarm-reindex CLI

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use swarm_reindex_cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // stdout carries the command stream; logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().into_config();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = swarm_reindex_core::run(&config, &mut out)
        .await
        .with_context(|| format!("Failed to reindex open reviews from {}", config.base_url))?;

    info!(
        emitted = summary.emitted,
        skipped = summary.skipped,
        "Reindex commands written"
    );
    if summary.skipped > 0 {
        eprintln!("Skipped {} review(s) that could not be indexed", summary.skipped);
    }

    Ok(())
}
