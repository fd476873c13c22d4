use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A single logged work interval.
///
/// `end` is `None` only while the interval is still open; an open entry
/// lives exclusively in the active-session slot, never in the entries table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkEntry {
    pub id: String,
    pub start: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_open_end")]
    pub end: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkEntry {
    /// New closed entry with a freshly assigned id.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, notes: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            start,
            end: Some(end),
            notes,
        }
    }

    /// New open entry (no end yet), used by the session tracker.
    pub fn open(start: DateTime<Utc>, notes: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            start,
            end: None,
            notes,
        }
    }

    /// True when the entry has an end and it does not precede the start.
    /// Imported documents can carry records that fail this.
    pub fn has_valid_range(&self) -> bool {
        match self.end {
            Some(end) => end >= self.start,
            None => false,
        }
    }

    pub fn start_local(&self) -> DateTime<Local> {
        self.start.with_timezone(&Local)
    }

    pub fn end_local(&self) -> Option<DateTime<Local>> {
        self.end.map(|e| e.with_timezone(&Local))
    }
}

/// Backup documents produced by other devices may encode an open interval
/// as an empty string instead of omitting the field. Decode "" and null
/// as `None` so the sentinel never reaches timestamp parsing.
fn deserialize_open_end<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom),
    }
}
