//! Anomaly Detector
//!
//! Flags expenses from the last month that sit more than two population
//! standard deviations above their category mean. One-sided: unusually small
//! amounts are never flagged.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

use crate::models::Transaction;
use crate::stats::{mean, population_std_dev};

use super::trailing_window_start;

/// Trailing window for anomaly detection
pub const ANOMALY_WINDOW_MONTHS: u32 = 1;

/// Categories with fewer transactions in the window are never checked
pub const MIN_ANOMALY_TRANSACTIONS: usize = 5;

const STD_DEV_MULTIPLIER: f64 = 2.0;

/// Find outlier expenses in the month ending at `as_of`
///
/// Results are ordered by category name, then by input order.
pub fn detect_anomalies(transactions: &[Transaction], as_of: NaiveDate) -> Vec<&Transaction> {
    let since = trailing_window_start(as_of, ANOMALY_WINDOW_MONTHS);

    let mut by_category: BTreeMap<&str, Vec<&Transaction>> = BTreeMap::new();
    for tx in transactions
        .iter()
        .filter(|t| t.is_expense() && t.date >= since)
    {
        by_category.entry(tx.category.as_str()).or_default().push(tx);
    }

    let mut anomalies = Vec::new();

    for (category, txs) in by_category {
        if txs.len() < MIN_ANOMALY_TRANSACTIONS {
            debug!(
                category,
                count = txs.len(),
                "Skipping category - too few transactions for anomaly detection"
            );
            continue;
        }

        let amounts: Vec<f64> = txs.iter().map(|t| t.amount).collect();
        let avg = mean(&amounts);
        let std_dev = population_std_dev(&amounts, avg);

        let before = anomalies.len();
        anomalies.extend(
            txs.into_iter()
                .filter(|t| exceeds_threshold(t.amount, avg, std_dev)),
        );

        if anomalies.len() > before {
            debug!(
                category,
                mean = avg,
                std_dev,
                flagged = anomalies.len() - before,
                "Flagged unusual spending"
            );
        }
    }

    anomalies
}

/// Strictly above `mean + 2·stddev`
pub(crate) fn exceeds_threshold(amount: f64, mean: f64, std_dev: f64) -> bool {
    amount > mean + STD_DEV_MULTIPLIER * std_dev
}
