//! Transaction file loading (JSON and CSV)
//!
//! Both formats carry the same fields:
//! `id` (optional), `date`, `amount`, `category`, `description`,
//! `type` (`income` | `expense`, `direction` accepted), `merchant` (optional).
//!
//! Rows are validated up front. The engine does no validation of its own, so
//! a bad date or negative amount fails the whole load here.

use chrono::{DateTime, NaiveDate};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Direction, Transaction};

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Json,
    Csv,
}

impl ImportFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    /// Sniff the format from content: JSON starts with `[` or `{`
    pub fn detect(content: &str) -> Self {
        match content.trim_start().chars().next() {
            Some('[') | Some('{') => Self::Json,
            _ => Self::Csv,
        }
    }
}

/// A row as it appears on disk, before validation
#[derive(Debug, Deserialize)]
struct RawTransaction {
    #[serde(default)]
    id: Option<String>,
    date: String,
    amount: f64,
    category: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "type", alias = "direction")]
    direction: String,
    #[serde(default)]
    merchant: Option<String>,
}

/// Parse a JSON array of transactions
pub fn parse_json<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let raw: Vec<RawTransaction> = serde_json::from_reader(reader)?;

    let transactions = raw
        .into_iter()
        .enumerate()
        .map(|(i, row)| validate(i + 1, row))
        .collect::<Result<Vec<_>>>()?;

    debug!(count = transactions.len(), "Parsed JSON transactions");
    Ok(transactions)
}

/// Parse CSV with a header row
///
/// Format: date,amount,category,description,type[,merchant][,id]
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut transactions = Vec::new();

    for (i, result) in rdr.deserialize::<RawTransaction>().enumerate() {
        let row = result?;
        transactions.push(validate(i + 1, row)?);
    }

    debug!(count = transactions.len(), "Parsed CSV transactions");
    Ok(transactions)
}

/// Load a transaction file, choosing the parser by extension or content
pub fn load_file(path: &Path) -> Result<Vec<Transaction>> {
    let content = fs::read_to_string(path)?;

    let format = ImportFormat::from_path(path).unwrap_or_else(|| ImportFormat::detect(&content));
    debug!(path = %path.display(), ?format, "Loading transactions");

    match format {
        ImportFormat::Json => parse_json(content.as_bytes()),
        ImportFormat::Csv => parse_csv(content.as_bytes()),
    }
}

/// Check a raw row and turn it into a Transaction. `row` is 1-based.
fn validate(row: usize, raw: RawTransaction) -> Result<Transaction> {
    let date = parse_date(&raw.date).ok_or_else(|| {
        Error::InvalidData(format!("Row {}: invalid date '{}'", row, raw.date))
    })?;

    if !raw.amount.is_finite() || raw.amount < 0.0 {
        return Err(Error::InvalidData(format!(
            "Row {}: amount must be a non-negative number, got {}",
            row, raw.amount
        )));
    }

    let direction = Direction::from_str(&raw.direction)
        .map_err(|e| Error::InvalidData(format!("Row {}: {}", row, e)))?;

    let merchant = raw
        .merchant
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty());

    let id = match raw.id.filter(|id| !id.trim().is_empty()) {
        Some(id) => id,
        None => generate_id(row, &date, &raw.description, raw.amount),
    };

    Ok(Transaction {
        id,
        date,
        amount: raw.amount,
        category: raw.category,
        description: raw.description,
        direction,
        merchant,
    })
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (date part kept)
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// Stable identifier for rows that arrive without one
///
/// The row number keeps identical same-day charges distinct.
fn generate_id(row: usize, date: &NaiveDate, description: &str, amount: f64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(row.to_be_bytes());
    hasher.update(date.to_string().as_bytes());
    hasher.update(description.as_bytes());
    hasher.update(amount.to_be_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_json() {
        let json = r#"[
            {"id": "a1", "date": "2026-03-01", "amount": 499, "category": "Entertainment",
             "description": "NETFLIX", "type": "expense", "merchant": "Netflix"},
            {"date": "2026-03-01T09:30:00+05:30", "amount": 90000, "category": "Salary",
             "description": "ACME PAYROLL", "type": "income"}
        ]"#;

        let txs = parse_json(json.as_bytes()).unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].id, "a1");
        assert_eq!(txs[0].merchant.as_deref(), Some("Netflix"));
        assert_eq!(txs[1].direction, Direction::Income);
        assert_eq!(txs[1].date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        // Generated SHA-256 hex
        assert_eq!(txs[1].id.len(), 64);
        assert!(txs[1].merchant.is_none());
    }

    #[test]
    fn test_parse_csv() {
        let csv = "\
date,amount,category,description,type,merchant
2026-03-01,499.00,Entertainment,NETFLIX.COM,expense,Netflix
2026-03-02,1250.50,Groceries,BIG BASKET,expense,
2026-03-03,90000,Salary,ACME PAYROLL,income,
";

        let txs = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(txs.len(), 3);
        assert_eq!(txs[0].merchant.as_deref(), Some("Netflix"));
        assert!(txs[1].merchant.is_none());
        assert_eq!(txs[1].amount, 1250.5);
        assert!(txs[2].is_income());
    }

    #[test]
    fn test_parse_csv_direction_header_and_missing_merchant_column() {
        let csv = "\
date,amount,category,description,direction
2026-03-01,120,Fuel,SHELL,expense
";

        let txs = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(txs.len(), 1);
        assert!(txs[0].is_expense());
        assert!(txs[0].merchant.is_none());
    }

    #[test]
    fn test_identical_rows_get_distinct_ids() {
        let csv = "\
date,amount,category,description,type
2026-03-01,50,Coffee,CAFE,expense
2026-03-01,50,Coffee,CAFE,expense
";

        let txs = parse_csv(csv.as_bytes()).unwrap();
        assert_ne!(txs[0].id, txs[1].id);

        // Deterministic across loads
        let again = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(txs[0].id, again[0].id);
    }

    #[test]
    fn test_invalid_rows_rejected() {
        let bad_date = r#"[{"date": "03/01/2026", "amount": 1, "category": "x",
            "description": "y", "type": "expense"}]"#;
        let err = parse_json(bad_date.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Row 1"));

        let negative = r#"[{"date": "2026-03-01", "amount": -5, "category": "x",
            "description": "y", "type": "expense"}]"#;
        assert!(matches!(
            parse_json(negative.as_bytes()),
            Err(Error::InvalidData(_))
        ));

        let direction = r#"[{"date": "2026-03-01", "amount": 5, "category": "x",
            "description": "y", "type": "transfer"}]"#;
        assert!(matches!(
            parse_json(direction.as_bytes()),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ImportFormat::from_path(Path::new("tx.JSON")),
            Some(ImportFormat::Json)
        );
        assert_eq!(
            ImportFormat::from_path(Path::new("tx.csv")),
            Some(ImportFormat::Csv)
        );
        assert_eq!(ImportFormat::from_path(Path::new("tx.txt")), None);
        assert_eq!(ImportFormat::detect("  [ {} ]"), ImportFormat::Json);
        assert_eq!(ImportFormat::detect("date,amount"), ImportFormat::Csv);
    }

    #[test]
    fn test_load_file_sniffs_unknown_extension() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(
            file,
            r#"[{{"date": "2026-03-01", "amount": 5, "category": "x", "description": "y", "type": "expense"}}]"#
        )
        .unwrap();

        let txs = load_file(file.path()).unwrap();
        assert_eq!(txs.len(), 1);
    }
}
