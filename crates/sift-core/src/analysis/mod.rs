//! Financial Analysis Engine
//!
//! Derives intelligence from one in-memory snapshot of transactions. Nothing
//! here performs I/O or keeps state between runs.
//!
//! ## Stages
//!
//! - **Pattern Analyzer** - per-category averages, frequency, and trend
//! - **Anomaly Detector** - expenses far above their category's recent mean
//! - **Recommendation Generator** - ranked advisories from the stages above
//!   plus recurring payment detection
//! - **Forecaster** - next three months of income and expenses
//!
//! Pattern analysis and anomaly detection share no data and may run
//! concurrently; both feed the recommendation generator.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sift_core::analysis::{AnalysisContext, FinancialAnalyzer};
//!
//! let analyzer = FinancialAnalyzer::new(transactions, AnalysisContext::today());
//! let report = analyzer.analyze_async().await?;
//! ```

pub mod anomalies;
pub mod engine;
pub mod forecast;
pub mod patterns;
pub mod recommendations;
pub mod recurring;
pub mod types;

use chrono::{Months, NaiveDate};

pub use anomalies::detect_anomalies;
pub use engine::{AnalysisContext, FinancialAnalyzer};
pub use forecast::{group_by_month, predict_future_spending, MonthlyTotals};
pub use patterns::analyze_spending_patterns;
pub use recommendations::generate_recommendations;
pub use recurring::find_recurring_payments;
pub use types::{
    AnalysisReport, Forecast, Recommendation, RecommendationType, RecurringPaymentCandidate,
    SpendingPattern, Trend,
};

/// Earliest date inside a window of `months` calendar months ending at `as_of`
///
/// Day-of-month clamps to the target month's length (Mar 31 minus one month is
/// Feb 28). Transactions on this date are inside the window.
pub(crate) fn trailing_window_start(as_of: NaiveDate, months: u32) -> NaiveDate {
    as_of
        .checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}
