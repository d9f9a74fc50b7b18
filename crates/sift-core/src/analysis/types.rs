//! Core types produced by the analysis stages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::Transaction;

/// Direction of a category's spending over the pattern window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
            Trend::Stable => "stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Trend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "increasing" => Ok(Trend::Increasing),
            "decreasing" => Ok(Trend::Decreasing),
            "stable" => Ok(Trend::Stable),
            _ => Err(format!("Unknown trend: {}", s)),
        }
    }
}

/// Per-category spending summary over the trailing six months
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingPattern {
    pub category: String,
    pub average_amount: f64,
    /// Transactions per month
    pub frequency: f64,
    pub trend: Trend,
    /// Data-sufficiency proxy in [0, 1], not a statistical interval
    pub confidence: f64,
}

/// A merchant whose charges look like a subscription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringPaymentCandidate {
    pub merchant: String,
    pub mean_amount: f64,
    pub mean_interval_days: f64,
    pub occurrence_count: usize,
}

/// Kinds of advisories the recommendation generator emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationType {
    SavingOpportunity,
    SpendingAlert,
    /// Reserved tag; no built-in rule produces it
    BudgetAdjustment,
    SubscriptionFinder,
}

impl RecommendationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationType::SavingOpportunity => "SAVING_OPPORTUNITY",
            RecommendationType::SpendingAlert => "SPENDING_ALERT",
            RecommendationType::BudgetAdjustment => "BUDGET_ADJUSTMENT",
            RecommendationType::SubscriptionFinder => "SUBSCRIPTION_FINDER",
        }
    }
}

impl fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecommendationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SAVING_OPPORTUNITY" => Ok(RecommendationType::SavingOpportunity),
            "SPENDING_ALERT" => Ok(RecommendationType::SpendingAlert),
            "BUDGET_ADJUSTMENT" => Ok(RecommendationType::BudgetAdjustment),
            "SUBSCRIPTION_FINDER" => Ok(RecommendationType::SubscriptionFinder),
            _ => Err(format!("Unknown recommendation type: {}", s)),
        }
    }
}

/// A ranked, human-readable advisory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub recommendation_type: RecommendationType,
    pub title: String,
    pub message: String,
    pub confidence: f64,
    /// Estimated savings, when the rule can put a number on it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_saved: Option<f64>,
    pub action_items: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Recommendation {
    /// Create a recommendation with no savings estimate, actions, or category
    pub fn new(
        recommendation_type: RecommendationType,
        title: impl Into<String>,
        message: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            recommendation_type,
            title: title.into(),
            message: message.into(),
            confidence,
            amount_saved: None,
            action_items: Vec::new(),
            category: None,
        }
    }

    pub fn with_amount_saved(mut self, amount: f64) -> Self {
        self.amount_saved = Some(amount);
        self
    }

    pub fn with_action_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.action_items = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Predicted totals for one future month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Target month as "YYYY-MM"
    pub month: String,
    pub predicted_income: f64,
    pub predicted_expenses: f64,
    pub confidence: f64,
}

/// Everything a single analysis run produces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub patterns: Vec<SpendingPattern>,
    pub recommendations: Vec<Recommendation>,
    pub forecast: Vec<Forecast>,
    pub anomalies: Vec<Transaction>,
}
