//! Sift CLI - Local financial analysis
//!
//! Usage:
//!   sift analyze --file transactions.json     Full analysis report
//!   sift patterns --file export.csv           Spending patterns only
//!   sift forecast --as-of 2026-03-31          Forecast from a fixed date
//!   sift analyze --json                       Machine-readable output

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let session = commands::open_session(
        &cli.file,
        cli.config.as_deref(),
        cli.as_of.as_deref(),
        cli.currency.as_deref(),
    )?;

    match cli.command {
        Commands::Analyze => commands::cmd_analyze(&session, cli.json).await,
        Commands::Patterns => commands::cmd_patterns(&session, cli.json),
        Commands::Anomalies => commands::cmd_anomalies(&session, cli.json),
        Commands::Recurring => commands::cmd_recurring(&session, cli.json),
        Commands::Recommendations => commands::cmd_recommendations(&session, cli.json),
        Commands::Forecast => commands::cmd_forecast(&session, cli.json),
        Commands::Summary => commands::cmd_summary(&session, cli.json),
    }
}
