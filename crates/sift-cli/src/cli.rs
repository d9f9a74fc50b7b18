//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sift - Local financial analysis
#[derive(Parser)]
#[command(name = "sift")]
#[command(
    about = "Find spending patterns, anomalies, subscriptions, and forecasts in your transactions",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Transaction file (JSON array or CSV with a header row)
    #[arg(short, long, default_value = "transactions.json", global = true)]
    pub file: PathBuf,

    /// Config file
    ///
    /// Defaults to ~/.local/share/sift/config.toml when present,
    /// otherwise built-in defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reference date for trailing windows and forecasts (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub as_of: Option<String>,

    /// Currency symbol for amounts in recommendations (e.g., "$")
    #[arg(long, global = true)]
    pub currency: Option<String>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full analysis (patterns, anomalies, recommendations, forecast)
    Analyze,

    /// Show per-category spending patterns (last 6 months)
    Patterns,

    /// Show unusual expenses (last month)
    Anomalies,

    /// Show merchants with subscription-like charges
    Recurring,

    /// Show ranked recommendations
    Recommendations,

    /// Show the three-month income/expense forecast
    Forecast,

    /// Show totals and monthly history for the transaction file
    Summary,
}
