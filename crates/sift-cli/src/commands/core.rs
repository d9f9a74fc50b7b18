//! Session setup and shared utilities

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde_json::Value;
use sift_core::{AnalysisContext, FinancialAnalyzer, SiftConfig};

/// Everything a command needs: resolved config plus a loaded analyzer
pub struct Session {
    pub config: SiftConfig,
    pub analyzer: FinancialAnalyzer,
}

impl Session {
    pub fn currency(&self) -> &str {
        &self.analyzer.context().currency_symbol
    }
}

/// Load config, apply flag overrides, and load the transaction file
pub fn open_session(
    file: &Path,
    config_path: Option<&Path>,
    as_of: Option<&str>,
    currency: Option<&str>,
) -> Result<Session> {
    let mut config = SiftConfig::load(config_path).context("Failed to load config")?;

    if let Some(date) = as_of {
        config.as_of = Some(parse_date(date)?);
    }
    if let Some(symbol) = currency {
        config.currency_symbol = symbol.to_string();
    }

    let transactions = sift_core::load_file(file)
        .with_context(|| format!("Failed to load transactions from {}", file.display()))?;

    let ctx = AnalysisContext::from_config(&config);
    tracing::debug!(
        count = transactions.len(),
        as_of = %ctx.as_of,
        "Loaded transactions"
    );

    Ok(Session {
        config,
        analyzer: FinancialAnalyzer::new(transactions, ctx),
    })
}

/// Parse a YYYY-MM-DD flag value
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").context("Invalid --as-of date format (use YYYY-MM-DD)")
}

/// Pretty-print a JSON value to stdout
pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
