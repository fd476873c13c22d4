//! Time utilities: elapsed hours and display breakdowns for an interval.

use chrono::{DateTime, Utc};

/// Fractional hours between two instants (millisecond delta / 3,600,000).
///
/// Callers are responsible for `end >= start`; a negative result is a
/// contract violation on their side, not an error here.
pub fn hours_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / 3_600_000.0
}

/// Whole-hour / whole-minute breakdown of a span, floor-truncated.
/// Display only, independent from the fractional value above.
pub fn duration_parts(start: DateTime<Utc>, end: DateTime<Utc>) -> (i64, i64) {
    let total_minutes = (end - start).num_minutes();
    (total_minutes / 60, total_minutes % 60)
}

/// "03h 25m" rendering of a span.
pub fn format_duration(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    let (h, m) = duration_parts(start, end);
    format!("{:02}h {:02}m", h, m)
}
