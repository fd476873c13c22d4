//! Period report aggregation.
//!
//! Pure reduction of the entry collection into totals for a resolved
//! period. No clock reads, no side effects: callers pass entries, the
//! period and the rate, and get the same answer every time.

use crate::models::entry::WorkEntry;
use crate::models::period::Period;
use crate::utils::time::hours_between;

#[derive(Debug, Clone)]
pub struct Report {
    pub total_hours: f64,
    pub total_earnings: f64,
    pub period_label: String,
    pub period_entries: Vec<WorkEntry>,
}

/// Reduce `entries` into totals for `period`.
///
/// Membership is decided by the entry's start alone; an entry that starts
/// inside the window and ends after it still counts in full. Records with
/// a missing or inverted range (possible after an import) are dropped from
/// both the sums and the returned subset.
pub fn aggregate(entries: &[WorkEntry], period: &Period, hourly_rate: f64) -> Report {
    let period_entries: Vec<WorkEntry> = entries
        .iter()
        .filter(|e| period.contains(e.start_local().naive_local()))
        .filter(|e| e.has_valid_range())
        .cloned()
        .collect();

    let total_hours: f64 = period_entries
        .iter()
        .filter_map(|e| e.end.map(|end| hours_between(e.start, end)))
        .sum();

    Report {
        total_hours,
        total_earnings: total_hours * hourly_rate,
        period_label: period.label.clone(),
        period_entries,
    }
}

/// One-line plain-text summary suitable for sharing.
pub fn share_line(report: &Report, currency_symbol: &str) -> String {
    format!(
        "{}: {:.2}h worked, {} earned",
        report.period_label,
        report.total_hours,
        crate::utils::formatting::format_currency(currency_symbol, report.total_earnings)
    )
}
