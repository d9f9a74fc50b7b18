//! Analysis engine - runs every stage over one transaction snapshot

use chrono::NaiveDate;
use std::sync::Arc;

use crate::config::SiftConfig;
use crate::error::{Error, Result};
use crate::models::Transaction;

use super::types::{
    AnalysisReport, Forecast, Recommendation, RecurringPaymentCandidate, SpendingPattern,
};
use super::{anomalies, forecast, patterns, recommendations, recurring};

/// Default symbol for rendering amounts in recommendation messages
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Inputs to an analysis run other than the transactions themselves
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisContext {
    /// Reference date: trailing windows end here, forecasts start the month after
    pub as_of: NaiveDate,
    /// Prefix for amounts in recommendation messages
    pub currency_symbol: String,
}

impl AnalysisContext {
    /// Create a context anchored at `as_of`
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }

    /// Create a context anchored at today's local date
    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    /// Build a context from loaded configuration
    pub fn from_config(config: &SiftConfig) -> Self {
        let as_of = config
            .as_of
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        Self::new(as_of).with_currency(config.currency_symbol.clone())
    }

    pub fn with_currency(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }
}

impl Default for AnalysisContext {
    fn default() -> Self {
        Self::today()
    }
}

/// Stateless analyzer over an immutable transaction snapshot
///
/// Every call recomputes from scratch; repeated runs are independent.
#[derive(Debug, Clone)]
pub struct FinancialAnalyzer {
    transactions: Arc<[Transaction]>,
    ctx: AnalysisContext,
}

impl FinancialAnalyzer {
    pub fn new(transactions: impl Into<Arc<[Transaction]>>, ctx: AnalysisContext) -> Self {
        Self {
            transactions: transactions.into(),
            ctx,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn context(&self) -> &AnalysisContext {
        &self.ctx
    }

    pub fn spending_patterns(&self) -> Vec<SpendingPattern> {
        patterns::analyze_spending_patterns(&self.transactions, self.ctx.as_of)
    }

    pub fn anomalies(&self) -> Vec<Transaction> {
        anomalies::detect_anomalies(&self.transactions, self.ctx.as_of)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn recurring_payments(&self) -> Vec<RecurringPaymentCandidate> {
        recurring::find_recurring_payments(&self.transactions)
    }

    /// Runs pattern analysis and anomaly detection to feed the generator
    pub fn recommendations(&self) -> Vec<Recommendation> {
        let patterns = self.spending_patterns();
        let anomalies = self.anomalies();
        self.recommend(&patterns, &anomalies)
    }

    pub fn forecast(&self) -> Vec<Forecast> {
        forecast::predict_future_spending(&self.transactions, self.ctx.as_of)
    }

    /// Run every stage sequentially on the calling thread
    pub fn analyze(&self) -> AnalysisReport {
        let patterns = self.spending_patterns();
        let anomalies = self.anomalies();
        self.assemble(patterns, anomalies)
    }

    /// Run pattern analysis and anomaly detection as concurrent blocking tasks,
    /// then the remaining stages
    ///
    /// Produces the same report as [`FinancialAnalyzer::analyze`].
    pub async fn analyze_async(&self) -> Result<AnalysisReport> {
        let as_of = self.ctx.as_of;

        let snapshot = Arc::clone(&self.transactions);
        let patterns_task = tokio::task::spawn_blocking(move || {
            patterns::analyze_spending_patterns(&snapshot, as_of)
        });

        let snapshot = Arc::clone(&self.transactions);
        let anomalies_task = tokio::task::spawn_blocking(move || {
            anomalies::detect_anomalies(&snapshot, as_of)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        });

        let (patterns, anomalies) = tokio::try_join!(patterns_task, anomalies_task)
            .map_err(|e| Error::Analysis(format!("Analysis task failed: {}", e)))?;

        Ok(self.assemble(patterns, anomalies))
    }

    fn recommend(
        &self,
        patterns: &[SpendingPattern],
        anomalies: &[Transaction],
    ) -> Vec<Recommendation> {
        recommendations::generate_recommendations(
            patterns,
            anomalies,
            &self.transactions,
            &self.ctx.currency_symbol,
        )
    }

    fn assemble(
        &self,
        patterns: Vec<SpendingPattern>,
        anomalies: Vec<Transaction>,
    ) -> AnalysisReport {
        let recommendations = self.recommend(&patterns, &anomalies);
        let forecast = self.forecast();

        tracing::info!(
            transactions = self.transactions.len(),
            as_of = %self.ctx.as_of,
            patterns = patterns.len(),
            anomalies = anomalies.len(),
            recommendations = recommendations.len(),
            forecast = forecast.len(),
            "Financial analysis complete"
        );

        AnalysisReport {
            patterns,
            recommendations,
            forecast,
            anomalies,
        }
    }
}
