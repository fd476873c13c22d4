//! Entry store: the durable collection of closed work intervals.
//!
//! The collection is always handed out ordered by start descending; the
//! ordering is re-established on every read, not trusted from a past write.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::WorkEntry;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, Row, params};

fn parse_rfc3339(raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTimestamp(raw.to_string())),
            )
        })
}

pub fn map_row(row: &Row) -> rusqlite::Result<WorkEntry> {
    let start_str: String = row.get("start_at")?;
    let end_str: Option<String> = row.get("end_at")?;

    let start = parse_rfc3339(&start_str)?;
    let end = match end_str.as_deref() {
        None | Some("") => None,
        Some(s) => Some(parse_rfc3339(s)?),
    };

    Ok(WorkEntry {
        id: row.get("id")?,
        start,
        end,
        notes: row.get("notes")?,
    })
}

/// Full collection, most recent start first.
pub fn list(pool: &mut DbPool) -> AppResult<Vec<WorkEntry>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT id, start_at, end_at, notes FROM entries")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    out.sort_by(|a, b| b.start.cmp(&a.start));

    Ok(out)
}

pub fn get(pool: &mut DbPool, id: &str) -> AppResult<Option<WorkEntry>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT id, start_at, end_at, notes FROM entries WHERE id = ?1")?;

    let mut rows = stmt.query_map([id], map_row)?;

    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

/// Upsert by id: replaces an existing record wholesale, inserts otherwise.
///
/// An entry without an end, or with an end earlier than its start, never
/// reaches the table; the write is a single statement, so a failed persist
/// leaves the previous record intact.
pub fn save(conn: &Connection, entry: &WorkEntry) -> AppResult<()> {
    let end = match entry.end {
        Some(end) => end,
        None => {
            return Err(AppError::InvalidEntry(
                "an entry must be closed before it is saved".to_string(),
            ));
        }
    };

    if end < entry.start {
        return Err(AppError::InvalidEntry(format!(
            "end {} is earlier than start {}",
            end.to_rfc3339(),
            entry.start.to_rfc3339()
        )));
    }

    conn.execute(
        "INSERT INTO entries (id, start_at, end_at, notes)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(id) DO UPDATE SET
             start_at = excluded.start_at,
             end_at   = excluded.end_at,
             notes    = excluded.notes",
        params![
            entry.id,
            entry.start.to_rfc3339(),
            end.to_rfc3339(),
            entry.notes,
        ],
    )?;

    Ok(())
}

/// Delete by id. Returns the number of removed rows; a missing id is a
/// no-op, not an error.
pub fn delete(conn: &Connection, id: &str) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
    Ok(n)
}

/// Insert without the closed-range check. Import only: a restored document
/// is taken as-is, the way it was exported.
pub fn insert_unchecked(conn: &Connection, entry: &WorkEntry) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO entries (id, start_at, end_at, notes)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            entry.id,
            entry.start.to_rfc3339(),
            entry.end.map(|e| e.to_rfc3339()),
            entry.notes,
        ],
    )?;
    Ok(())
}
