//! Usage analytics over ledger snapshots
//!
//! Everything here is a pure function of its arguments: the same snapshot
//! and pricing always produce the same report.

mod projection;
mod regression;

pub use projection::{project_bill, project_next_bill, BillHistory, BILL_HISTORY_LEN};
pub use regression::{fit_line, LinearFit};

use crate::core::{
    AnalysisReport, ApplianceEntry, Error, ReportLine, Result, SavingsTip, Tier, TierThresholds,
};
use crate::pricing::CostEstimator;

/// Hours cut per appliance when estimating savings
pub const DEFAULT_REDUCTION_HOURS: u8 = 2;

/// Classify an entry with the default 8/4 hour thresholds
pub fn classify_usage(entry: &ApplianceEntry) -> Tier {
    classify_usage_with(entry, TierThresholds::default())
}

pub fn classify_usage_with(entry: &ApplianceEntry, thresholds: TierThresholds) -> Tier {
    if entry.hours_per_day > thresholds.high {
        Tier::High
    } else if entry.hours_per_day > thresholds.moderate {
        Tier::Moderate
    } else {
        Tier::Efficient
    }
}

/// Daily running cost of an entry
pub fn estimate_daily_cost<E: CostEstimator + ?Sized>(entry: &ApplianceEntry, pricing: &E) -> f64 {
    pricing.daily_cost(&entry.name, f64::from(entry.hours_per_day))
}

/// Daily saving from running an entry `reduce_by` fewer hours
///
/// Usage is clamped at zero hours, so the saving never exceeds the full cost.
pub fn estimate_savings_on_reduction<E: CostEstimator + ?Sized>(
    entry: &ApplianceEntry,
    pricing: &E,
    reduce_by: u8,
) -> f64 {
    let reduced = entry.hours_per_day.saturating_sub(reduce_by);
    estimate_daily_cost(entry, pricing) - pricing.daily_cost(&entry.name, f64::from(reduced))
}

/// Build a report with the default tier thresholds
pub fn build_usage_report<E: CostEstimator + ?Sized>(
    snapshot: &[ApplianceEntry],
    pricing: &E,
) -> Result<AnalysisReport> {
    build_usage_report_with(snapshot, pricing, TierThresholds::default())
}

/// Totals, shares, costs and tiers for every entry of `snapshot`
///
/// An empty snapshot is an [`Error::EmptyState`]. When entries exist but all
/// run zero hours, every share is zero.
pub fn build_usage_report_with<E: CostEstimator + ?Sized>(
    snapshot: &[ApplianceEntry],
    pricing: &E,
    thresholds: TierThresholds,
) -> Result<AnalysisReport> {
    if snapshot.is_empty() {
        return Err(Error::empty_state("no appliances recorded"));
    }

    let total_hours: u32 = snapshot.iter().map(|e| u32::from(e.hours_per_day)).sum();

    let lines: Vec<ReportLine> = snapshot
        .iter()
        .map(|entry| {
            let percentage = if total_hours == 0 {
                0.0
            } else {
                f64::from(entry.hours_per_day) / f64::from(total_hours) * 100.0
            };
            ReportLine {
                name: entry.name.clone(),
                hours_per_day: entry.hours_per_day,
                percentage,
                daily_cost: estimate_daily_cost(entry, pricing),
                tier: classify_usage_with(entry, thresholds),
            }
        })
        .collect();

    let total_daily_cost = lines.iter().map(|l| l.daily_cost).sum();

    log::debug!(
        "Built report: {} appliances, {} h/day, cost {:.2} ({})",
        lines.len(),
        total_hours,
        total_daily_cost,
        pricing.name()
    );

    Ok(AnalysisReport {
        total_hours,
        total_daily_cost,
        lines,
    })
}

/// The `n` most-used entries, most hours first
///
/// Ties keep their ledger order.
pub fn top_consumers(snapshot: &[ApplianceEntry], n: usize) -> Vec<ApplianceEntry> {
    let mut sorted = snapshot.to_vec();
    sorted.sort_by(|a, b| b.hours_per_day.cmp(&a.hours_per_day));
    sorted.truncate(n);
    sorted
}

/// One savings suggestion per entry of `snapshot`
pub fn savings_advice<E: CostEstimator + ?Sized>(
    snapshot: &[ApplianceEntry],
    pricing: &E,
    reduce_by: u8,
) -> Result<Vec<SavingsTip>> {
    if snapshot.is_empty() {
        return Err(Error::empty_state("no appliances recorded"));
    }

    Ok(snapshot
        .iter()
        .map(|entry| SavingsTip {
            name: entry.name.clone(),
            reduce_by,
            savings: estimate_savings_on_reduction(entry, pricing, reduce_by),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{CostModel, CostRateTable};

    fn entry(name: &str, hours: u8) -> ApplianceEntry {
        ApplianceEntry::new(name, hours)
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(classify_usage(&entry("AC", 9)), Tier::High);
        assert_eq!(classify_usage(&entry("AC", 8)), Tier::Moderate);
        assert_eq!(classify_usage(&entry("AC", 5)), Tier::Moderate);
        assert_eq!(classify_usage(&entry("AC", 4)), Tier::Efficient);
        assert_eq!(classify_usage(&entry("AC", 0)), Tier::Efficient);
        assert_eq!(classify_usage(&entry("AC", 24)), Tier::High);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = TierThresholds { high: 8, moderate: 5 };
        assert_eq!(classify_usage_with(&entry("TV", 5), thresholds), Tier::Efficient);
        assert_eq!(classify_usage_with(&entry("TV", 6), thresholds), Tier::Moderate);
    }

    #[test]
    fn test_daily_cost() {
        let table = CostRateTable::default();
        assert_eq!(estimate_daily_cost(&entry("Air Conditioner", 3), &table), 60.0);
        assert_eq!(estimate_daily_cost(&entry("Kettle", 3), &table), 15.0);
    }

    #[test]
    fn test_savings_on_reduction() {
        let table = CostRateTable::flat(2.0).unwrap();
        let savings = estimate_savings_on_reduction(&entry("Fan", 6), &table, DEFAULT_REDUCTION_HOURS);
        assert_eq!(format!("{:.2}", savings), "4.00");
    }

    #[test]
    fn test_savings_clamped() {
        let table = CostRateTable::flat(2.0).unwrap();
        assert_eq!(estimate_savings_on_reduction(&entry("Fan", 1), &table, 2), 2.0);
        assert_eq!(estimate_savings_on_reduction(&entry("Fan", 0), &table, 2), 0.0);
    }

    #[test]
    fn test_report_empty_snapshot() {
        let table = CostRateTable::default();
        assert!(matches!(build_usage_report(&[], &table), Err(Error::EmptyState(_))));
    }

    #[test]
    fn test_report_all_zero_hours() {
        let table = CostRateTable::default();
        let report = build_usage_report(&[entry("Fan", 0), entry("TV", 0)], &table).unwrap();

        assert_eq!(report.total_hours, 0);
        assert!(report.lines.iter().all(|l| l.percentage == 0.0));
    }

    #[test]
    fn test_report_values() {
        let table = CostRateTable::new([("Fan", 2.0)], 5.0).unwrap();
        let snapshot = [entry("Fan", 6), entry("AC", 9), entry("TV", 5)];
        let report = build_usage_report(&snapshot, &table).unwrap();

        assert_eq!(report.total_hours, 20);
        assert_eq!(report.lines.len(), 3);
        assert_eq!(report.lines[0].percentage, 30.0);
        assert_eq!(report.lines[0].daily_cost, 12.0);
        assert_eq!(report.lines[1].tier, Tier::High);
        assert_eq!(report.lines[1].daily_cost, 45.0);
        assert_eq!(report.lines[2].tier, Tier::Moderate);
        assert_eq!(report.total_daily_cost, 12.0 + 45.0 + 25.0);

        let share: f64 = report.lines.iter().map(|l| l.percentage).sum();
        assert!((share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_serializes_tiers_uppercase() {
        let table = CostRateTable::default();
        let report = build_usage_report(&[entry("AC", 9)], &table).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["lines"][0]["tier"], "HIGH");
    }

    #[test]
    fn test_top_consumers() {
        let snapshot = [
            entry("Fan", 6),
            entry("Air Conditioner", 5),
            entry("Refrigerator", 8),
            entry("Washing Machine", 2),
            entry("TV", 5),
        ];
        let top = top_consumers(&snapshot, 3);
        let names: Vec<_> = top.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Refrigerator", "Fan", "Air Conditioner"]);

        assert_eq!(top_consumers(&snapshot, 10).len(), 5);
        assert!(top_consumers(&[], 3).is_empty());
    }

    #[test]
    fn test_advice_with_model() {
        let model = CostModel::reference().unwrap();
        let tips = savings_advice(&[entry("Fan", 6), entry("TV", 1)], &model, 2).unwrap();

        assert_eq!(tips.len(), 2);
        assert!((tips[0].savings - 2.0 * model.slope()).abs() < 1e-9);
        assert!((tips[1].savings - model.slope()).abs() < 1e-9);
        assert!(matches!(savings_advice(&[], &model, 2), Err(Error::EmptyState(_))));
    }
}
