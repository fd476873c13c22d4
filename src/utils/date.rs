//! Date/time parsing helpers for CLI inputs.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a user-supplied timestamp.
///
/// Accepts a full RFC 3339 string ("2024-03-01T08:00:00+01:00") or the
/// shorter local forms "YYYY-MM-DDTHH:MM" / "YYYY-MM-DD HH:MM", which are
/// interpreted in the host timezone.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            // earliest() picks the first valid instant around DST gaps
            if let Some(local) = Local.from_local_datetime(&naive).earliest() {
                return Some(local.with_timezone(&Utc));
            }
        }
    }

    None
}

