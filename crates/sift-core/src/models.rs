//! Transaction model shared by loading and analysis

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a transaction adds to income or expense totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Income,
    Expense,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown direction: {}", s)),
        }
    }
}

/// A single transaction supplied by the caller. Never mutated by analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    /// Always non-negative; `direction` decides which side it counts toward
    pub amount: f64,
    pub category: String,
    pub description: String,
    #[serde(rename = "type", alias = "direction")]
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.direction == Direction::Expense
    }

    pub fn is_income(&self) -> bool {
        self.direction == Direction::Income
    }

    /// Year-month bucket key (e.g., "2026-03")
    pub fn month_key(&self) -> String {
        format!("{:04}-{:02}", self.date.year(), self.date.month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_round_trip() {
        assert_eq!(Direction::from_str("income").unwrap(), Direction::Income);
        assert_eq!(Direction::from_str(" Expense ").unwrap(), Direction::Expense);
        assert!(Direction::from_str("transfer").is_err());
        assert_eq!(Direction::Expense.to_string(), "expense");
    }

    #[test]
    fn test_transaction_serializes_direction_as_type() {
        let tx = Transaction {
            id: "t1".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 7).unwrap(),
            amount: 499.0,
            category: "Entertainment".to_string(),
            description: "NETFLIX".to_string(),
            direction: Direction::Expense,
            merchant: None,
        };

        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["type"], "expense");
        assert_eq!(value["date"], "2026-03-07");
        assert!(value.get("merchant").is_none());
        assert_eq!(tx.month_key(), "2026-03");
    }

    #[test]
    fn test_transaction_accepts_direction_alias() {
        let json = r#"{
            "id": "t2",
            "date": "2026-01-02",
            "amount": 12.5,
            "category": "Dining",
            "description": "Lunch",
            "direction": "expense",
            "merchant": "Cafe"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert!(tx.is_expense());
        assert!(!tx.is_income());
        assert_eq!(tx.merchant.as_deref(), Some("Cafe"));
    }
}
