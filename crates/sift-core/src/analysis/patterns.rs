//! Spending Pattern Analyzer
//!
//! Groups recent expenses by category and summarizes each group:
//! - Average transaction amount
//! - Frequency (transactions per month)
//! - Trend (second half of the window vs the first)
//! - Confidence (how much data backs the pattern)

use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

use crate::models::Transaction;
use crate::stats::{mean, months_between};

use super::trailing_window_start;
use super::types::{SpendingPattern, Trend};

/// Trailing window for pattern analysis
pub const PATTERN_WINDOW_MONTHS: u32 = 6;

/// Categories with fewer qualifying transactions emit no pattern
pub const MIN_PATTERN_TRANSACTIONS: usize = 3;

/// Below this many transactions the half-split comparison is skipped
const TREND_MIN_TRANSACTIONS: usize = 6;

/// Percent change between half means that counts as a trend
const TREND_THRESHOLD_PERCENT: f64 = 10.0;

/// Transaction count at which confidence saturates at 1.0
const CONFIDENCE_FULL_AT: f64 = 10.0;

/// Summarize expense categories over the six months ending at `as_of`
///
/// Output is ordered by category name.
pub fn analyze_spending_patterns(
    transactions: &[Transaction],
    as_of: NaiveDate,
) -> Vec<SpendingPattern> {
    let since = trailing_window_start(as_of, PATTERN_WINDOW_MONTHS);

    let mut by_category: BTreeMap<&str, Vec<&Transaction>> = BTreeMap::new();
    for tx in transactions
        .iter()
        .filter(|t| t.is_expense() && t.date >= since)
    {
        by_category.entry(tx.category.as_str()).or_default().push(tx);
    }

    let mut patterns = Vec::new();

    for (category, txs) in by_category {
        if txs.len() < MIN_PATTERN_TRANSACTIONS {
            debug!(
                category,
                count = txs.len(),
                "Skipping category - not enough transactions for a pattern"
            );
            continue;
        }

        let amounts: Vec<f64> = txs.iter().map(|t| t.amount).collect();

        patterns.push(SpendingPattern {
            category: category.to_string(),
            average_amount: mean(&amounts),
            frequency: monthly_frequency(&txs),
            trend: classify_trend(&txs),
            confidence: (txs.len() as f64 / CONFIDENCE_FULL_AT).min(1.0),
        });
    }

    debug!(
        count = patterns.len(),
        since = %since,
        "Spending pattern analysis complete"
    );

    patterns
}

/// Transactions per month across the group's own date span
///
/// A group that fits inside one calendar month divides by 1.
fn monthly_frequency(txs: &[&Transaction]) -> f64 {
    let first = txs.iter().map(|t| t.date).min();
    let last = txs.iter().map(|t| t.date).max();

    let span = match (first, last) {
        (Some(first), Some(last)) => months_between(first, last),
        _ => 0,
    };

    txs.len() as f64 / span.max(1) as f64
}

/// Compare the mean of the later half of the group against the earlier half
fn classify_trend(txs: &[&Transaction]) -> Trend {
    if txs.len() < TREND_MIN_TRANSACTIONS {
        return Trend::Stable;
    }

    let mut sorted = txs.to_vec();
    sorted.sort_by_key(|t| t.date);

    let half = sorted.len() / 2;
    let (earlier, later) = sorted.split_at(half);

    let earlier_avg = mean(&earlier.iter().map(|t| t.amount).collect::<Vec<_>>());
    let later_avg = mean(&later.iter().map(|t| t.amount).collect::<Vec<_>>());

    let change = (later_avg - earlier_avg) / earlier_avg * 100.0;

    if change > TREND_THRESHOLD_PERCENT {
        Trend::Increasing
    } else if change < -TREND_THRESHOLD_PERCENT {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}
