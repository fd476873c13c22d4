use chrono::{Local, TimeZone, Utc};

use shiftledger::core::period::resolve;
use shiftledger::core::report::{aggregate, share_line};
use shiftledger::models::entry::WorkEntry;
use shiftledger::models::period::PeriodKind;
use shiftledger::utils::time::{duration_parts, hours_between};

fn local_utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> chrono::DateTime<Utc> {
    Local
        .with_ymd_and_hms(y, mo, d, h, mi, 0)
        .unwrap()
        .with_timezone(&Utc)
}

fn closed(y: i32, mo: u32, d: u32, h0: u32, m0: u32, h1: u32, m1: u32) -> WorkEntry {
    WorkEntry::new(local_utc(y, mo, d, h0, m0), local_utc(y, mo, d, h1, m1), None)
}

#[test]
fn test_hours_between_matches_elapsed_minutes() {
    let cases = [(8, 0, 12, 30), (9, 15, 9, 16), (0, 0, 23, 59), (7, 0, 7, 0)];

    for (h0, m0, h1, m1) in cases {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, h0, m0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 1, h1, m1, 0).unwrap();

        let expected_minutes = ((h1 * 60 + m1) as f64) - ((h0 * 60 + m0) as f64);
        assert!((hours_between(start, end) * 60.0 - expected_minutes).abs() < 1e-9);
    }
}

#[test]
fn test_hours_between_is_negative_on_misuse() {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 3, 1, 11, 0, 0).unwrap();
    assert!(hours_between(start, end) < 0.0);
}

#[test]
fn test_duration_parts_floor_truncates() {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 50).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 3, 1, 10, 45, 40).unwrap();

    // 2h 44m 50s floors to 2h 44m
    assert_eq!(duration_parts(start, end), (2, 44));
}

#[test]
fn test_daily_aggregation_example() {
    let entries = vec![
        closed(2024, 3, 1, 8, 0, 12, 30),
        closed(2024, 3, 1, 13, 0, 16, 0),
    ];

    let period = resolve(PeriodKind::Daily, Local.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap());
    let report = aggregate(&entries, &period, 100.0);

    assert!((report.total_hours - 7.5).abs() < 1e-9);
    assert!((report.total_earnings - 750.0).abs() < 1e-9);
    assert_eq!(report.period_entries.len(), 2);
}

#[test]
fn test_membership_is_decided_by_start_only() {
    // starts on the 15th, ends on the 16th: counted in full in the first
    // half, not at all in the second
    let crossing = WorkEntry::new(
        local_utc(2024, 3, 15, 22, 0),
        local_utc(2024, 3, 16, 2, 0),
        None,
    );
    let entries = vec![crossing];

    let first_half = resolve(
        PeriodKind::Biweekly,
        Local.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap(),
    );
    let second_half = resolve(
        PeriodKind::Biweekly,
        Local.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap(),
    );

    let first = aggregate(&entries, &first_half, 10.0);
    assert_eq!(first.period_entries.len(), 1);
    assert!((first.total_hours - 4.0).abs() < 1e-9);

    let second = aggregate(&entries, &second_half, 10.0);
    assert!(second.period_entries.is_empty());
    assert_eq!(second.total_hours, 0.0);
}

#[test]
fn test_invalid_entries_are_silently_excluded() {
    let good = closed(2024, 3, 1, 8, 0, 10, 0);

    // open interval and inverted interval, both possible after an import
    let open = WorkEntry::open(local_utc(2024, 3, 1, 9, 0), None);
    let inverted = WorkEntry {
        id: "inv".into(),
        start: local_utc(2024, 3, 1, 12, 0),
        end: Some(local_utc(2024, 3, 1, 11, 0)),
        notes: None,
    };

    let entries = vec![good.clone(), open, inverted];
    let period = resolve(PeriodKind::Daily, Local.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap());
    let report = aggregate(&entries, &period, 50.0);

    assert_eq!(report.period_entries.len(), 1);
    assert_eq!(report.period_entries[0].id, good.id);
    assert!((report.total_hours - 2.0).abs() < 1e-9);
}

#[test]
fn test_negative_rate_is_tolerated_without_nan() {
    let entries = vec![closed(2024, 3, 1, 8, 0, 10, 0)];
    let period = resolve(PeriodKind::Daily, Local.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap());

    let report = aggregate(&entries, &period, -5.0);

    assert!(report.total_earnings.is_finite());
    assert!((report.total_earnings + 10.0).abs() < 1e-9);
}

#[test]
fn test_empty_period_produces_zero_totals() {
    let entries = vec![closed(2024, 2, 1, 8, 0, 10, 0)];
    let period = resolve(PeriodKind::Daily, Local.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap());

    let report = aggregate(&entries, &period, 100.0);

    assert_eq!(report.total_hours, 0.0);
    assert_eq!(report.total_earnings, 0.0);
    assert!(report.period_entries.is_empty());
}

#[test]
fn test_period_entries_keep_store_order() {
    // store order is start descending; the subset must preserve it
    let early = closed(2024, 3, 1, 8, 0, 10, 0);
    let late = closed(2024, 3, 1, 13, 0, 16, 0);
    let entries = vec![late.clone(), early.clone()];

    let period = resolve(PeriodKind::Daily, Local.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap());
    let report = aggregate(&entries, &period, 0.0);

    let ids: Vec<&str> = report.period_entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec![late.id.as_str(), early.id.as_str()]);
}

#[test]
fn test_share_line_contains_label_hours_and_currency() {
    let entries = vec![closed(2024, 3, 1, 8, 0, 12, 30)];
    let period = resolve(PeriodKind::Daily, Local.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap());
    let report = aggregate(&entries, &period, 100.0);

    let line = share_line(&report, "$");
    assert!(line.contains(&report.period_label));
    assert!(line.contains("4.50h"));
    assert!(line.contains("$450.00"));
}
