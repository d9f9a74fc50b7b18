//! Recurring payment detection
//!
//! A merchant looks subscription-like when it has at least three charges whose
//! amounts barely move (coefficient of variation under 0.2). Runs over the
//! full history, not a trailing window.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

use crate::models::Transaction;
use crate::stats::{coefficient_of_variation, mean};

use super::types::RecurringPaymentCandidate;

/// Merchants with fewer transactions are skipped
pub const MIN_RECURRING_OCCURRENCES: usize = 3;

/// Amount variation must be strictly below this
const MAX_AMOUNT_VARIATION: f64 = 0.2;

/// Interval reported when no gaps can be measured
const DEFAULT_INTERVAL_DAYS: f64 = 30.0;

/// Find subscription-like merchants, ordered by merchant name
///
/// Transactions without a merchant are not grouped.
pub fn find_recurring_payments(transactions: &[Transaction]) -> Vec<RecurringPaymentCandidate> {
    let mut by_merchant: BTreeMap<&str, Vec<&Transaction>> = BTreeMap::new();
    for tx in transactions {
        if let Some(merchant) = tx.merchant.as_deref() {
            by_merchant.entry(merchant).or_default().push(tx);
        }
    }

    let mut candidates = Vec::new();

    for (merchant, txs) in by_merchant {
        if txs.len() < MIN_RECURRING_OCCURRENCES {
            continue;
        }

        let amounts: Vec<f64> = txs.iter().map(|t| t.amount).collect();
        let variation = coefficient_of_variation(&amounts);

        // Zero mean yields NaN
        if variation.is_nan() || variation >= MAX_AMOUNT_VARIATION {
            debug!(
                merchant,
                variation, "Skipping merchant - amounts too variable for a subscription"
            );
            continue;
        }

        let dates: Vec<NaiveDate> = txs.iter().map(|t| t.date).collect();

        candidates.push(RecurringPaymentCandidate {
            merchant: merchant.to_string(),
            mean_amount: mean(&amounts),
            mean_interval_days: mean_interval_days(dates),
            occurrence_count: txs.len(),
        });
    }

    debug!(
        count = candidates.len(),
        "Recurring payment detection complete"
    );

    candidates
}

/// Average gap in days between chronologically sorted dates
fn mean_interval_days(mut dates: Vec<NaiveDate>) -> f64 {
    dates.sort();

    let gaps: Vec<f64> = dates
        .windows(2)
        .map(|w| (w[1] - w[0]).num_days() as f64)
        .collect();

    if gaps.is_empty() {
        DEFAULT_INTERVAL_DAYS
    } else {
        mean(&gaps)
    }
}
