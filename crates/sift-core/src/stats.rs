//! Statistical helpers shared by the analysis stages
//!
//! Plain IEEE-754 arithmetic. Empty inputs yield NaN rather than an error so
//! that callers see the same degenerate values the stages would compute
//! inline.

use chrono::{Datelike, NaiveDate};

/// Arithmetic mean
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by N) around a precomputed mean
pub fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Standard deviation divided by mean
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    let m = mean(values);
    population_std_dev(values, m) / m
}

/// Calendar-month difference between two dates, ignoring the day of month
///
/// Jan 31 and Feb 1 are one month apart; Jan 1 and Jan 31 are zero.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_population_std_dev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(population_std_dev(&values, mean(&values)), 2.0);
        assert_eq!(population_std_dev(&[5.0, 5.0, 5.0], 5.0), 0.0);
    }

    #[test]
    fn test_coefficient_of_variation() {
        assert_eq!(coefficient_of_variation(&[10.0, 10.0, 10.0]), 0.0);
        let cv = coefficient_of_variation(&[499.0, 499.0, 500.0, 499.0]);
        assert!(cv < 0.01);
        assert!(coefficient_of_variation(&[0.0, 0.0, 0.0]).is_nan());
    }

    #[test]
    fn test_months_between() {
        assert_eq!(months_between(date(2026, 1, 1), date(2026, 1, 31)), 0);
        assert_eq!(months_between(date(2026, 1, 31), date(2026, 2, 1)), 1);
        assert_eq!(months_between(date(2025, 11, 15), date(2026, 2, 10)), 3);
    }
}
