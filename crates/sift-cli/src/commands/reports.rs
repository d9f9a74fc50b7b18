//! Single-stage report commands and the table printers they share with `analyze`

use anyhow::Result;
use sift_core::{Forecast, Recommendation, RecurringPaymentCandidate, SpendingPattern, Transaction};

use super::{print_json, truncate, Session};

pub fn cmd_patterns(session: &Session, json: bool) -> Result<()> {
    let patterns = session.analyzer.spending_patterns();
    if json {
        return print_json(&serde_json::to_value(&patterns)?);
    }
    print_patterns(&patterns, session.currency());
    Ok(())
}

pub fn cmd_anomalies(session: &Session, json: bool) -> Result<()> {
    let anomalies = session.analyzer.anomalies();
    if json {
        return print_json(&serde_json::to_value(&anomalies)?);
    }
    print_anomalies(&anomalies, session.currency());
    Ok(())
}

pub fn cmd_recurring(session: &Session, json: bool) -> Result<()> {
    let candidates = session.analyzer.recurring_payments();
    if json {
        return print_json(&serde_json::to_value(&candidates)?);
    }
    print_recurring(&candidates, session.currency());
    Ok(())
}

pub fn cmd_recommendations(session: &Session, json: bool) -> Result<()> {
    let recommendations = session.analyzer.recommendations();
    if json {
        return print_json(&serde_json::to_value(&recommendations)?);
    }
    print_recommendations(&recommendations, session.currency());
    Ok(())
}

pub fn cmd_forecast(session: &Session, json: bool) -> Result<()> {
    let forecast = session.analyzer.forecast();
    if json {
        return print_json(&serde_json::to_value(&forecast)?);
    }
    print_forecast(&forecast, session.currency());
    Ok(())
}

pub fn print_patterns(patterns: &[SpendingPattern], currency: &str) {
    println!("Spending Patterns (last 6 months)");
    println!("{}", "=".repeat(60));

    if patterns.is_empty() {
        println!("No categories with enough transactions.");
        return;
    }

    println!(
        "{:<20} {:>12} {:>10} {:>12} {:>5}",
        "Category", "Average", "Per month", "Trend", "Conf"
    );
    println!("{}", "-".repeat(60));

    for p in patterns {
        println!(
            "{:<20} {:>12} {:>10.1} {:>12} {:>4.0}%",
            truncate(&p.category, 20),
            format!("{}{:.0}", currency, p.average_amount),
            p.frequency,
            p.trend.as_str(),
            p.confidence * 100.0
        );
    }
}

pub fn print_anomalies(anomalies: &[Transaction], currency: &str) {
    println!("Unusual Spending (last month)");
    println!("{}", "=".repeat(60));

    if anomalies.is_empty() {
        println!("Nothing unusual.");
        return;
    }

    for tx in anomalies {
        println!(
            "{}  {:<16} {:>12}  {}",
            tx.date,
            truncate(&tx.category, 16),
            format!("{}{:.2}", currency, tx.amount),
            truncate(tx.merchant.as_deref().unwrap_or(&tx.description), 24)
        );
    }
}

pub fn print_recurring(candidates: &[RecurringPaymentCandidate], currency: &str) {
    println!("Recurring Payments");
    println!("{}", "=".repeat(60));

    if candidates.is_empty() {
        println!("No recurring payments detected.");
        return;
    }

    println!(
        "{:<28} {:>12} {:>10} {:>6}",
        "Merchant", "Amount", "Every", "Count"
    );
    println!("{}", "-".repeat(60));

    for c in candidates {
        println!(
            "{:<28} {:>12} {:>8.0} d {:>6}",
            truncate(&c.merchant, 28),
            format!("{}{:.2}", currency, c.mean_amount),
            c.mean_interval_days,
            c.occurrence_count
        );
    }
}

pub fn print_recommendations(recommendations: &[Recommendation], currency: &str) {
    println!("Recommendations");
    println!("{}", "=".repeat(60));

    if recommendations.is_empty() {
        println!("No recommendations right now.");
        return;
    }

    for (i, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. [{}] {} ({:.0}% confidence)",
            i + 1,
            rec.recommendation_type,
            rec.title,
            rec.confidence * 100.0
        );
        println!("   {}", rec.message);
        if let Some(saved) = rec.amount_saved {
            println!("   Potential savings: {}{:.0}", currency, saved);
        }
        for item in &rec.action_items {
            println!("   - {}", item);
        }
        println!();
    }
}

pub fn print_forecast(forecast: &[Forecast], currency: &str) {
    println!("Forecast (next 3 months)");
    println!("{}", "=".repeat(60));

    if forecast.is_empty() {
        println!("Need at least 3 months of history to forecast.");
        return;
    }

    println!(
        "{:<10} {:>16} {:>16} {:>8}",
        "Month", "Income", "Expenses", "Conf"
    );
    println!("{}", "-".repeat(60));

    for f in forecast {
        println!(
            "{:<10} {:>16} {:>16} {:>7.0}%",
            f.month,
            format!("{}{:.0}", currency, f.predicted_income),
            format!("{}{:.0}", currency, f.predicted_expenses),
            f.confidence * 100.0
        );
    }
}
