use powerbill_tracker_lib::analytics::{
    build_usage_report, classify_usage, estimate_savings_on_reduction, project_next_bill,
    top_consumers, BillHistory, DEFAULT_REDUCTION_HOURS,
};
use powerbill_tracker_lib::core::{ApplianceEntry, Error, Session, Tier};
use powerbill_tracker_lib::ledger::ApplianceLedger;
use powerbill_tracker_lib::pricing::CostRateTable;

#[test]
fn ledger_round_trip_and_overwrite() {
    let mut ledger = ApplianceLedger::new();
    ledger.add_or_update("TV", 4).unwrap();
    let before = ledger.snapshot();

    ledger.add_or_update("Fan", 6).unwrap();
    ledger.add_or_update("Fan", 3).unwrap();
    assert_eq!(ledger.get("Fan"), Some(3));
    assert_eq!(ledger.len(), 2);

    ledger.remove("Fan").unwrap();
    assert_eq!(ledger.snapshot(), before);
}

#[test]
fn failed_operations_leave_ledger_usable() {
    let mut ledger = ApplianceLedger::new();
    assert!(matches!(ledger.remove("Heater"), Err(Error::NotFound(_))));
    assert!(matches!(ledger.add_or_update("Fan", 25), Err(Error::Validation(_))));
    assert!(ledger.is_empty());

    ledger.add_or_update("Fan", 6).unwrap();
    assert_eq!(ledger.total_hours(), 6);
}

#[test]
fn documented_examples_hold() {
    let history = BillHistory::new([100.0, 110.0, 120.0]).unwrap();
    assert_eq!(format!("{:.2}", project_next_bill(&history).unwrap()), "130.00");

    let flat = CostRateTable::flat(2.0).unwrap();
    let fan = ApplianceEntry::new("Fan", 6);
    let savings = estimate_savings_on_reduction(&fan, &flat, DEFAULT_REDUCTION_HOURS);
    assert_eq!(format!("{:.2}", savings), "4.00");

    assert_eq!(classify_usage(&ApplianceEntry::new("AC", 9)), Tier::High);

    let empty = ApplianceLedger::new();
    assert!(matches!(
        build_usage_report(&empty.snapshot(), &flat),
        Err(Error::EmptyState(_))
    ));
}

#[test]
fn session_reports_on_reference_appliances() {
    let mut session = Session::new();
    for (name, hours) in [
        ("Fan", 6),
        ("Air Conditioner", 5),
        ("Refrigerator", 8),
        ("Washing Machine", 2),
        ("TV", 4),
        ("Heater", 3),
    ] {
        session.ledger_mut().add_or_update(name, hours).unwrap();
    }

    let report = session.report().unwrap();
    assert_eq!(report.total_hours, 28);
    // Each reference appliance costs its sample daily cost at its sample hours
    let costs: Vec<f64> = report.lines.iter().map(|l| l.daily_cost).collect();
    let expected = [30.0, 100.0, 20.0, 10.0, 25.0, 50.0];
    for (cost, expected) in costs.iter().zip(expected) {
        assert!((cost - expected).abs() < 1e-9);
    }

    let tiers: Vec<Tier> = report.lines.iter().map(|l| l.tier).collect();
    assert_eq!(
        tiers,
        vec![
            Tier::Moderate,
            Tier::Moderate,
            Tier::Moderate,
            Tier::Efficient,
            Tier::Efficient,
            Tier::Efficient
        ]
    );

    let top: Vec<String> = top_consumers(&session.ledger().snapshot(), 3)
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(top, vec!["Refrigerator", "Fan", "Air Conditioner"]);
}
