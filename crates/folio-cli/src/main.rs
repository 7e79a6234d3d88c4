//! Folio CLI - AI Portfolio Review
//!
//! Hosts the review web page and runs reviews from the terminal.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::Cli;

/// Initialize tracing from the environment, with a sensible default
/// filter when `RUST_LOG` is unset.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "folio=debug,folio_web=debug,folio_client=debug"
    } else {
        "folio=info,folio_web=info"
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.execute().await
}
