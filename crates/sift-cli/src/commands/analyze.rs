//! Full analysis command

use anyhow::{bail, Context, Result};
use sift_core::AnalysisReport;

use super::{
    print_anomalies, print_forecast, print_json, print_patterns, print_recommendations, Session,
};

/// Run the whole engine, enforcing the configured minimum snapshot size
///
/// Any failure aborts the run; there is no partial report.
pub async fn run_analysis(session: &Session) -> Result<AnalysisReport> {
    let count = session.analyzer.transactions().len();
    let min = session.config.min_transactions;

    if count < min {
        bail!(
            "Analysis unavailable: need at least {} transactions, found {}",
            min,
            count
        );
    }

    session
        .analyzer
        .analyze_async()
        .await
        .context("Analysis unavailable")
}

pub async fn cmd_analyze(session: &Session, json: bool) -> Result<()> {
    let report = run_analysis(session).await?;

    if json {
        return print_json(&serde_json::to_value(&report)?);
    }

    let currency = session.currency();
    println!(
        "Analysis as of {} ({} transactions)",
        session.analyzer.context().as_of,
        session.analyzer.transactions().len()
    );
    println!();
    print_patterns(&report.patterns, currency);
    println!();
    print_anomalies(&report.anomalies, currency);
    println!();
    print_forecast(&report.forecast, currency);
    println!();
    print_recommendations(&report.recommendations, currency);

    Ok(())
}
