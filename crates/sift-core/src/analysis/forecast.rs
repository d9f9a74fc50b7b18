//! Forecaster
//!
//! Trend-adjusted moving average: the mean of the three most recent monthly
//! buckets, grown by a fixed rate per month ahead (2% income, 1% expenses).
//! The growth rates are constants, not fitted to the data.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::models::{Direction, Transaction};

use super::types::Forecast;

/// Number of future months produced
pub const FORECAST_HORIZON_MONTHS: u32 = 3;

/// Distinct months of history required; also the size of the baseline
pub const MIN_HISTORY_MONTHS: usize = 3;

const INCOME_GROWTH_PER_MONTH: f64 = 0.02;
const EXPENSE_GROWTH_PER_MONTH: f64 = 0.01;
const CONFIDENCE_DECAY_PER_MONTH: f64 = 0.1;
const CONFIDENCE_FLOOR: f64 = 0.7;

/// Income and expense totals for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// "YYYY-MM"
    pub month: String,
    pub total_income: f64,
    pub total_expenses: f64,
}

/// Bucket every transaction by year-month, oldest first
pub fn group_by_month(transactions: &[Transaction]) -> Vec<MonthlyTotals> {
    let mut buckets: BTreeMap<(i32, u32), (f64, f64)> = BTreeMap::new();

    for tx in transactions {
        let entry = buckets
            .entry((tx.date.year(), tx.date.month()))
            .or_insert((0.0, 0.0));
        match tx.direction {
            Direction::Income => entry.0 += tx.amount,
            Direction::Expense => entry.1 += tx.amount,
        }
    }

    buckets
        .into_iter()
        .map(|((year, month), (income, expenses))| MonthlyTotals {
            month: format!("{:04}-{:02}", year, month),
            total_income: income,
            total_expenses: expenses,
        })
        .collect()
}

/// Predict the three months after `as_of`
///
/// Returns an empty list when history covers fewer than three months.
pub fn predict_future_spending(transactions: &[Transaction], as_of: NaiveDate) -> Vec<Forecast> {
    let monthly = group_by_month(transactions);

    if monthly.len() < MIN_HISTORY_MONTHS {
        debug!(
            months = monthly.len(),
            "Skipping forecast - not enough monthly history"
        );
        return vec![];
    }

    let recent = &monthly[monthly.len() - MIN_HISTORY_MONTHS..];
    let baseline_income =
        recent.iter().map(|m| m.total_income).sum::<f64>() / MIN_HISTORY_MONTHS as f64;
    let baseline_expenses =
        recent.iter().map(|m| m.total_expenses).sum::<f64>() / MIN_HISTORY_MONTHS as f64;

    let anchor = first_of_month(as_of);

    let forecasts: Vec<Forecast> = (1..=FORECAST_HORIZON_MONTHS)
        .map(|i| {
            let ahead = i as f64;
            let target = anchor
                .checked_add_months(Months::new(i))
                .unwrap_or(NaiveDate::MAX);

            Forecast {
                month: target.format("%Y-%m").to_string(),
                predicted_income: baseline_income * (1.0 + INCOME_GROWTH_PER_MONTH * ahead),
                predicted_expenses: baseline_expenses * (1.0 + EXPENSE_GROWTH_PER_MONTH * ahead),
                confidence: (1.0 - CONFIDENCE_DECAY_PER_MONTH * ahead).max(CONFIDENCE_FLOOR),
            }
        })
        .collect();

    debug!(
        baseline_income,
        baseline_expenses, "Forecast generated"
    );

    forecasts
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
