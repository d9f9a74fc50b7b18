//! Transaction file summary

use anyhow::Result;
use serde_json::json;
use sift_core::analysis::group_by_month;

use super::{print_json, Session};

pub fn cmd_summary(session: &Session, json: bool) -> Result<()> {
    let transactions = session.analyzer.transactions();
    let months = group_by_month(transactions);

    let first = transactions.iter().map(|t| t.date).min();
    let last = transactions.iter().map(|t| t.date).max();
    let total_income: f64 = months.iter().map(|m| m.total_income).sum();
    let total_expenses: f64 = months.iter().map(|m| m.total_expenses).sum();

    if json {
        return print_json(&json!({
            "transactions": transactions.len(),
            "first_date": first,
            "last_date": last,
            "total_income": total_income,
            "total_expenses": total_expenses,
            "months": months,
        }));
    }

    let currency = session.currency();

    println!("Transaction Summary");
    println!("{}", "=".repeat(50));
    println!("Transactions: {}", transactions.len());
    match (first, last) {
        (Some(first), Some(last)) => println!("Date range:   {} to {}", first, last),
        _ => println!("Date range:   (none)"),
    }
    println!("Income:       {}{:.2}", currency, total_income);
    println!("Expenses:     {}{:.2}", currency, total_expenses);
    println!("Net:          {}{:.2}", currency, total_income - total_expenses);

    if !months.is_empty() {
        println!();
        println!("{:<10} {:>16} {:>16}", "Month", "Income", "Expenses");
        println!("{}", "-".repeat(50));
        for m in &months {
            println!(
                "{:<10} {:>16} {:>16}",
                m.month,
                format!("{}{:.2}", currency, m.total_income),
                format!("{}{:.2}", currency, m.total_expenses)
            );
        }
    }

    if transactions.len() < session.config.min_transactions {
        println!();
        println!(
            "Note: `sift analyze` needs at least {} transactions.",
            session.config.min_transactions
        );
    }

    Ok(())
}
