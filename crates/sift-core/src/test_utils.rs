//! Test utilities for sift-core
//!
//! Small builders for transactions so stage tests read as data.

use chrono::NaiveDate;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::{Direction, Transaction};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn transaction(
    date: NaiveDate,
    category: &str,
    amount: f64,
    direction: Direction,
) -> Transaction {
    let n = NEXT_ID.fetch_add(1, Ordering::SeqCst);
    Transaction {
        id: format!("tx-{}", n),
        date,
        amount,
        category: category.to_string(),
        description: format!("{} #{}", category.to_uppercase(), n),
        direction,
        merchant: None,
    }
}

pub fn expense(date: NaiveDate, category: &str, amount: f64) -> Transaction {
    transaction(date, category, amount, Direction::Expense)
}

pub fn income(date: NaiveDate, category: &str, amount: f64) -> Transaction {
    transaction(date, category, amount, Direction::Income)
}

pub fn with_merchant(mut tx: Transaction, merchant: &str) -> Transaction {
    tx.merchant = Some(merchant.to_string());
    tx
}
