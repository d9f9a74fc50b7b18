//! Sift Core Library
//!
//! Local financial analysis over a snapshot of transactions:
//! - Spending patterns per category (average, frequency, trend)
//! - Statistical anomaly detection
//! - Recurring payment detection
//! - Ranked recommendations
//! - Three-month income/expense forecast
//! - JSON/CSV transaction loading and TOML configuration

pub mod analysis;
pub mod config;
pub mod error;
pub mod import;
pub mod models;
pub mod stats;

/// Transaction builders for tests
#[cfg(test)]
pub mod test_utils;

pub use analysis::{
    AnalysisContext, AnalysisReport, FinancialAnalyzer, Forecast, MonthlyTotals, Recommendation,
    RecommendationType, RecurringPaymentCandidate, SpendingPattern, Trend,
};
pub use config::SiftConfig;
pub use error::{Error, Result};
pub use import::{load_file, ImportFormat};
pub use models::{Direction, Transaction};
