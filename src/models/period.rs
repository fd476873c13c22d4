use chrono::NaiveDateTime;
use clap::ValueEnum;

/// Reporting window granularity.
///
/// `Biweekly` is the fixed 1st-15th / 16th-end split of the calendar month,
/// not a rolling 14-day window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PeriodKind {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
}

/// A resolved calendar interval, computed on demand and never persisted.
/// Bounds are local wall-clock times, inclusive on both ends for membership.
#[derive(Debug, Clone)]
pub struct Period {
    pub kind: PeriodKind,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub label: String,
}

impl Period {
    /// Membership test on a local timestamp. Only the start of an entry is
    /// ever checked against the window.
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        t >= self.start && t <= self.end
    }
}
