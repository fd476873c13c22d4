//! Calendar period resolution.
//!
//! All windows are derived from a caller-supplied "now"; nothing in here
//! reads the clock, so resolution is reproducible in tests.

use crate::models::period::{Period, PeriodKind};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

fn start_of_day(d: NaiveDate) -> NaiveDateTime {
    d.and_hms_opt(0, 0, 0).unwrap()
}

fn end_of_day(d: NaiveDate) -> NaiveDateTime {
    d.and_hms_milli_opt(23, 59, 59, 999).unwrap()
}

fn first_of_month(d: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(d.year(), d.month(), 1).unwrap()
}

fn last_of_month(d: NaiveDate) -> NaiveDate {
    let (year, month) = if d.month() == 12 {
        (d.year() + 1, 1)
    } else {
        (d.year(), d.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap().pred_opt().unwrap()
}

/// Resolve the calendar window containing `now` for the given kind.
///
/// The fortnight split is the fixed business rule: days 1-15 form the first
/// half, day 16 through the month end the second, whatever the month length.
/// The first half closes at 15th 23:59:59 sharp.
pub fn resolve(kind: PeriodKind, now: DateTime<Local>) -> Period {
    let today = now.date_naive();

    let (start, end) = match kind {
        PeriodKind::Daily => (start_of_day(today), end_of_day(today)),

        PeriodKind::Weekly => {
            let monday = today - chrono::Days::new(today.weekday().num_days_from_monday() as u64);
            let sunday = monday + chrono::Days::new(6);
            (start_of_day(monday), end_of_day(sunday))
        }

        PeriodKind::Biweekly => {
            if today.day() <= 15 {
                let mid = NaiveDate::from_ymd_opt(today.year(), today.month(), 15).unwrap();
                (
                    start_of_day(first_of_month(today)),
                    mid.and_hms_opt(23, 59, 59).unwrap(),
                )
            } else {
                let sixteenth = NaiveDate::from_ymd_opt(today.year(), today.month(), 16).unwrap();
                (start_of_day(sixteenth), end_of_day(last_of_month(today)))
            }
        }

        PeriodKind::Monthly => (
            start_of_day(first_of_month(today)),
            end_of_day(last_of_month(today)),
        ),
    };

    let label = label_for(kind, start, end);

    Period { kind, start, end, label }
}

fn label_for(kind: PeriodKind, start: NaiveDateTime, end: NaiveDateTime) -> String {
    match kind {
        PeriodKind::Daily => format!("Today, {}", start.format("%-d %B %Y")),
        PeriodKind::Weekly => format!(
            "Week of {} to {}",
            start.format("%-d %b"),
            end.format("%-d %b %Y")
        ),
        PeriodKind::Biweekly => format!(
            "Fortnight of {} to {}",
            start.format("%-d"),
            end.format("%-d %B %Y")
        ),
        PeriodKind::Monthly => format!("Month of {}", start.format("%B %Y")),
    }
}
