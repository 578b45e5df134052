//! Derived business metrics for the report endpoints.
//!
//! SQL aggregates the raw sums (material cost, hours, supplier prices);
//! this module turns them into profits, margins, ranks, anomaly levels and
//! display strings. Rounding to two decimals happens here, at the edge,
//! so intermediate values keep full precision.

use std::cmp::Ordering;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Assumed working hours per month, used to turn a monthly salary into an
/// hourly labor rate.
pub const HOURS_PER_MONTH: f64 = 160.0;

/// A supplier counts toward a project when its price is at most this
/// factor times the unit price the project paid.
pub const SUPPLIER_PRICE_TOLERANCE: f64 = 1.1;

/// Paid price above `min supplier price * HIGH_ANOMALY_FACTOR` is HIGH.
pub const HIGH_ANOMALY_FACTOR: f64 = 1.2;
/// Paid price above `min supplier price * MEDIUM_ANOMALY_FACTOR` is MEDIUM.
pub const MEDIUM_ANOMALY_FACTOR: f64 = 1.1;

/// Number of top projects listed per material in the hot-materials report.
pub const TOP_PROJECTS_PER_MATERIAL: usize = 3;

// ---------------------------------------------------------------------------
// Arithmetic helpers
// ---------------------------------------------------------------------------

/// Round to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Hourly labor rate for a monthly salary.
pub fn hourly_rate(monthly_salary: f64) -> f64 {
    monthly_salary / HOURS_PER_MONTH
}

/// Labor cost of `hours` worked by an employee on `monthly_salary`.
pub fn labor_cost(hours: f64, monthly_salary: f64) -> f64 {
    hours * hourly_rate(monthly_salary)
}

/// `part` as a percentage of `total`; zero when the total is not positive.
pub fn percentage_share(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}

/// Descending comparison for floats (NaN sorts last).
pub fn cmp_desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

// ---------------------------------------------------------------------------
// Profit
// ---------------------------------------------------------------------------

/// Profit and margin for a revenue figure and its two cost components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitSummary {
    pub total_cost: f64,
    pub profit: f64,
    /// Percent of revenue; zero when revenue is not positive.
    pub margin: f64,
}

impl ProfitSummary {
    pub fn compute(revenue: f64, material_cost: f64, labor_cost: f64) -> Self {
        let total_cost = material_cost + labor_cost;
        let profit = revenue - total_cost;
        let margin = if revenue > 0.0 {
            profit / revenue * 100.0
        } else {
            0.0
        };
        Self {
            total_cost,
            profit,
            margin,
        }
    }
}

// ---------------------------------------------------------------------------
// Price anomalies
// ---------------------------------------------------------------------------

/// How far a paid unit price sits above the cheapest known supplier price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AnomalyLevel {
    High,
    Medium,
    Low,
}

impl AnomalyLevel {
    /// Classify `paid` against `min_supplier_price`.
    ///
    /// Without a positive supplier price there is nothing to compare
    /// against and the line is `Low`.
    pub fn classify(paid: f64, min_supplier_price: f64) -> Self {
        if min_supplier_price <= 0.0 {
            Self::Low
        } else if paid > min_supplier_price * HIGH_ANOMALY_FACTOR {
            Self::High
        } else if paid > min_supplier_price * MEDIUM_ANOMALY_FACTOR {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Only HIGH and MEDIUM lines are reported.
    pub fn is_reportable(self) -> bool {
        !matches!(self, Self::Low)
    }
}

/// Percent by which `paid` exceeds `min_supplier_price`, if one is known.
pub fn price_variance_percent(paid: f64, min_supplier_price: f64) -> Option<f64> {
    (min_supplier_price > 0.0).then(|| (paid - min_supplier_price) / min_supplier_price * 100.0)
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Dense ranks (1-based) of `items` under `cmp`, returned in input order.
///
/// Items comparing `Equal` share a rank and the next distinct item gets the
/// following integer, so ranks never have gaps: `[10, 10, 7]` ranked
/// descending yields `[1, 1, 2]`.
pub fn dense_ranks<T>(items: &[T], cmp: impl Fn(&T, &T) -> Ordering) -> Vec<u32> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| cmp(&items[a], &items[b]));

    let mut ranks = vec![0; items.len()];
    let mut rank = 0;
    let mut previous: Option<usize> = None;
    for idx in order {
        let tied = previous.is_some_and(|p| cmp(&items[p], &items[idx]) == Ordering::Equal);
        if !tied {
            rank += 1;
        }
        ranks[idx] = rank;
        previous = Some(idx);
    }
    ranks
}

// ---------------------------------------------------------------------------
// Display formatting
// ---------------------------------------------------------------------------

/// Format an amount with thousands separators and two decimals
/// (`1234567.891` -> `1,234,567.89`).
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", round2(value).abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && round2(value) != 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

/// Label for a project's contribution to a material: `Name (1,234.00)`.
pub fn project_cost_label(project_name: &str, cost: f64) -> String {
    format!("{project_name} ({})", format_amount(cost))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- profit --

    #[test]
    fn profit_and_margin_from_costs() {
        let summary = ProfitSummary::compute(1000.0, 300.0, 200.0);
        assert!((summary.profit - 500.0).abs() < f64::EPSILON);
        assert!((summary.total_cost - 500.0).abs() < f64::EPSILON);
        assert_eq!(round2(summary.margin), 50.00);
    }

    #[test]
    fn margin_is_zero_without_revenue() {
        let summary = ProfitSummary::compute(0.0, 120.0, 30.0);
        assert!((summary.profit + 150.0).abs() < f64::EPSILON);
        assert_eq!(summary.margin, 0.0);
    }

    #[test]
    fn negative_margin_on_loss() {
        let summary = ProfitSummary::compute(200.0, 250.0, 50.0);
        assert_eq!(round2(summary.margin), -50.0);
    }

    #[test]
    fn labor_cost_uses_monthly_hours() {
        // 16000 / 160 = 100 per hour.
        assert!((labor_cost(10.0, 16_000.0) - 1000.0).abs() < f64::EPSILON);
        assert!((hourly_rate(8_000.0) - 50.0).abs() < f64::EPSILON);
    }

    // -- anomalies --

    #[test]
    fn anomaly_levels_against_min_supplier_price() {
        assert_eq!(AnomalyLevel::classify(121.0, 100.0), AnomalyLevel::High);
        assert_eq!(AnomalyLevel::classify(115.0, 100.0), AnomalyLevel::Medium);
        assert_eq!(AnomalyLevel::classify(105.0, 100.0), AnomalyLevel::Low);
    }

    #[test]
    fn anomaly_thresholds_are_exclusive() {
        assert_eq!(AnomalyLevel::classify(120.0, 100.0), AnomalyLevel::Medium);
        assert_eq!(AnomalyLevel::classify(110.0, 100.0), AnomalyLevel::Low);
    }

    #[test]
    fn no_supplier_price_is_low() {
        assert_eq!(AnomalyLevel::classify(500.0, 0.0), AnomalyLevel::Low);
        assert_eq!(price_variance_percent(500.0, 0.0), None);
    }

    #[test]
    fn only_high_and_medium_are_reportable() {
        assert!(AnomalyLevel::High.is_reportable());
        assert!(AnomalyLevel::Medium.is_reportable());
        assert!(!AnomalyLevel::Low.is_reportable());
    }

    #[test]
    fn variance_percent() {
        let v = price_variance_percent(121.0, 100.0).unwrap();
        assert_eq!(round2(v), 21.0);
    }

    // -- ranking --

    #[test]
    fn dense_rank_shares_rank_on_ties() {
        let counts = [5_i64, 5, 3, 1];
        let ranks = dense_ranks(&counts, |a, b| b.cmp(a));
        assert_eq!(ranks, vec![1, 1, 2, 3]);
    }

    #[test]
    fn dense_rank_returns_ranks_in_input_order() {
        let values = [10.0_f64, 40.0, 20.0, 40.0];
        let ranks = dense_ranks(&values, |a, b| cmp_desc(*a, *b));
        assert_eq!(ranks, vec![3, 1, 2, 1]);
    }

    #[test]
    fn dense_rank_with_tie_break() {
        // (project count, total value); ties need both keys equal.
        let stats = [(2_i64, 100.0_f64), (2, 300.0), (2, 300.0), (1, 900.0)];
        let ranks = dense_ranks(&stats, |a, b| b.0.cmp(&a.0).then(cmp_desc(a.1, b.1)));
        assert_eq!(ranks, vec![2, 1, 1, 3]);
    }

    #[test]
    fn dense_rank_of_empty_input() {
        let empty: [i64; 0] = [];
        assert!(dense_ranks(&empty, |a, b| a.cmp(b)).is_empty());
    }

    // -- formatting --

    #[test]
    fn formats_amounts_with_grouping() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.5), "999.50");
        assert_eq!(format_amount(1234.0), "1,234.00");
        assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
        assert_eq!(format_amount(-45_000.0), "-45,000.00");
    }

    #[test]
    fn project_label() {
        assert_eq!(
            project_cost_label("Olaya Tower", 125_000.0),
            "Olaya Tower (125,000.00)"
        );
    }

    #[test]
    fn share_of_zero_total_is_zero() {
        assert_eq!(percentage_share(10.0, 0.0), 0.0);
        assert_eq!(round2(percentage_share(1.0, 3.0)), 33.33);
    }

    #[test]
    fn round2_half_away_from_zero() {
        assert_eq!(round2(2.345_000_1), 2.35);
        assert_eq!(round2(-1.005_000_1), -1.01);
    }
}
