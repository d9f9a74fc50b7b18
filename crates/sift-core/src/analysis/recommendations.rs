//! Recommendation Generator
//!
//! Turns stage outputs into advisories. Three independent rules:
//! - **Saving opportunity**: large, frequent spending categories
//! - **Subscription finder**: merchants with regular, stable charges
//! - **Spending alert**: one per anomalous transaction
//!
//! Results are concatenated in that order, then stable-sorted by confidence
//! (highest first). No deduplication across rules.

use tracing::debug;

use crate::models::Transaction;

use super::recurring::find_recurring_payments;
use super::types::{Recommendation, RecommendationType, SpendingPattern};

/// Average transaction amount a category must exceed to be a saving target
const SAVING_MIN_AVERAGE: f64 = 5000.0;

/// Transactions per month a category must exceed to be a saving target
const SAVING_MIN_FREQUENCY: f64 = 4.0;

/// Share of the average amount assumed recoverable
const SAVING_RATE: f64 = 0.15;

const SUBSCRIPTION_CONFIDENCE: f64 = 0.8;
const ALERT_CONFIDENCE: f64 = 0.9;

/// Build the ranked advisory list
///
/// `transactions` is the full snapshot; recurring detection is not windowed.
pub fn generate_recommendations(
    patterns: &[SpendingPattern],
    anomalies: &[Transaction],
    transactions: &[Transaction],
    currency: &str,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    recommendations.extend(saving_opportunities(patterns, currency));
    recommendations.extend(subscription_findings(transactions, currency));
    recommendations.extend(spending_alerts(anomalies, currency));

    // sort_by is stable: ties keep generation order
    recommendations.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    debug!(
        count = recommendations.len(),
        "Recommendation generation complete"
    );

    recommendations
}

fn saving_opportunities<'a>(
    patterns: &'a [SpendingPattern],
    currency: &'a str,
) -> impl Iterator<Item = Recommendation> + 'a {
    patterns
        .iter()
        .filter(|p| p.average_amount > SAVING_MIN_AVERAGE && p.frequency > SAVING_MIN_FREQUENCY)
        .map(move |p| {
            let savings = p.average_amount * SAVING_RATE;

            Recommendation::new(
                RecommendationType::SavingOpportunity,
                format!("Reduce {} Spending", p.category),
                format!(
                    "You spend an average of {}{:.0} per transaction on {}, about {:.1} times a month. A 15% reduction could save {}{:.0}.",
                    currency, p.average_amount, p.category, p.frequency, currency, savings
                ),
                p.confidence,
            )
            .with_amount_saved(savings)
            .with_action_items([
                format!("Review recent {} transactions", p.category),
                format!("Set a monthly budget for {}", p.category),
                "Look for alternative options".to_string(),
            ])
            .with_category(p.category.clone())
        })
}

fn subscription_findings(transactions: &[Transaction], currency: &str) -> Vec<Recommendation> {
    find_recurring_payments(transactions)
        .into_iter()
        .map(|c| {
            Recommendation::new(
                RecommendationType::SubscriptionFinder,
                "Recurring Payment Detected",
                format!(
                    "You have a regular payment of ~{}{:.0} every {:.0} days to {} ({} charges so far).",
                    currency, c.mean_amount, c.mean_interval_days, c.merchant, c.occurrence_count
                ),
                SUBSCRIPTION_CONFIDENCE,
            )
            .with_action_items([
                "Confirm this is an active subscription",
                "Evaluate if this service is still needed",
                "Consider annual payment for discounts",
            ])
        })
        .collect()
}

fn spending_alerts<'a>(
    anomalies: &'a [Transaction],
    currency: &'a str,
) -> impl Iterator<Item = Recommendation> + 'a {
    anomalies.iter().map(move |tx| {
        // Fall back to the description when the bank gave no merchant
        let payee = tx.merchant.as_deref().unwrap_or(&tx.description);

        Recommendation::new(
            RecommendationType::SpendingAlert,
            "Unusual Spending Detected",
            format!(
                "Transaction of {}{:.2} at {} is significantly higher than your usual {} spending.",
                currency, tx.amount, payee, tx.category
            ),
            ALERT_CONFIDENCE,
        )
        .with_action_items([
            "Verify this transaction",
            "Check if this was a one-time purchase",
            "Monitor future spending in this category",
        ])
        .with_category(tx.category.clone())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::Trend;
    use crate::test_utils::{date, expense, with_merchant};

    fn pattern(category: &str, average_amount: f64, frequency: f64, confidence: f64) -> SpendingPattern {
        SpendingPattern {
            category: category.to_string(),
            average_amount,
            frequency,
            trend: Trend::Stable,
            confidence,
        }
    }

    #[test]
    fn test_saving_opportunity_thresholds() {
        let patterns = vec![
            pattern("Rent", 25000.0, 1.0, 1.0),      // infrequent
            pattern("Coffee", 150.0, 20.0, 1.0),     // cheap
            pattern("Shopping", 6000.0, 5.0, 0.7),   // qualifies
            pattern("Dining", 5000.0, 8.0, 1.0),     // average not strictly above
        ];

        let recs = generate_recommendations(&patterns, &[], &[], "₹");
        assert_eq!(recs.len(), 1);

        let rec = &recs[0];
        assert_eq!(rec.recommendation_type, RecommendationType::SavingOpportunity);
        assert_eq!(rec.title, "Reduce Shopping Spending");
        assert_eq!(rec.category.as_deref(), Some("Shopping"));
        assert!((rec.amount_saved.unwrap() - 900.0).abs() < 1e-9);
        assert_eq!(rec.confidence, 0.7);
        assert_eq!(rec.action_items.len(), 3);
        assert!(rec.message.contains("₹900"));
    }

    #[test]
    fn test_subscription_finder_uses_full_history() {
        // Years old; still counts
        let txs: Vec<Transaction> = (1..=3)
            .map(|m| with_merchant(expense(date(2020, m, 1), "Music", 119.0), "Spotify"))
            .collect();

        let recs = generate_recommendations(&[], &[], &txs, "$");
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].recommendation_type, RecommendationType::SubscriptionFinder);
        assert_eq!(recs[0].confidence, 0.8);
        assert!(recs[0].category.is_none());
        assert!(recs[0].message.contains("Spotify"));
        assert!(recs[0].message.contains("$119"));
    }

    #[test]
    fn test_spending_alert_per_anomaly() {
        let anomalies = vec![
            with_merchant(expense(date(2026, 3, 20), "Dining", 5000.0), "Fancy Bistro"),
            expense(date(2026, 3, 21), "Fuel", 4000.0),
        ];

        let recs = generate_recommendations(&[], &anomalies, &[], "₹");
        assert_eq!(recs.len(), 2);
        assert!(recs
            .iter()
            .all(|r| r.recommendation_type == RecommendationType::SpendingAlert));
        assert!(recs[0].message.contains("Fancy Bistro"));
        assert!(recs[0].message.contains("₹5000.00"));
        assert_eq!(recs[0].category.as_deref(), Some("Dining"));
        // No merchant: description stands in
        assert!(recs[1].message.contains(&anomalies[1].description));
    }

    #[test]
    fn test_sorted_by_confidence_stable() {
        let patterns = vec![
            pattern("Shopping", 6000.0, 5.0, 1.0),
            pattern("Travel", 9000.0, 6.0, 0.5),
            pattern("Electronics", 7000.0, 5.0, 0.8),
        ];
        let subs: Vec<Transaction> = (1..=3)
            .map(|m| with_merchant(expense(date(2026, m, 1), "Music", 119.0), "Spotify"))
            .collect();
        let anomalies = vec![expense(date(2026, 3, 21), "Fuel", 4000.0)];

        let recs = generate_recommendations(&patterns, &anomalies, &subs, "₹");
        assert_eq!(recs.len(), 5);

        for pair in recs.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }

        let order: Vec<(RecommendationType, Option<&str>)> = recs
            .iter()
            .map(|r| (r.recommendation_type, r.category.as_deref()))
            .collect();
        assert_eq!(
            order,
            vec![
                (RecommendationType::SavingOpportunity, Some("Shopping")),
                (RecommendationType::SpendingAlert, Some("Fuel")),
                // Tie at 0.8: saving opportunity was generated first
                (RecommendationType::SavingOpportunity, Some("Electronics")),
                (RecommendationType::SubscriptionFinder, None),
                (RecommendationType::SavingOpportunity, Some("Travel")),
            ]
        );
    }

    #[test]
    fn test_no_deduplication_across_rules() {
        let patterns = vec![pattern("Dining", 6000.0, 5.0, 0.6)];
        let anomalies = vec![expense(date(2026, 3, 21), "Dining", 15000.0)];

        let recs = generate_recommendations(&patterns, &anomalies, &[], "₹");
        assert_eq!(recs.len(), 2);
        assert!(recs.iter().all(|r| r.category.as_deref() == Some("Dining")));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(generate_recommendations(&[], &[], &[], "₹").is_empty());
    }
}
