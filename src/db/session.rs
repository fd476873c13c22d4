//! Durable slot for the single in-progress session, if any.
//!
//! The slot holds at most one open entry. Closing it moves the record into
//! the entries table; the two writes share one transaction in
//! core::session so the move is all-or-nothing.

use crate::db::entries;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::entry::WorkEntry;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, Row, params};

fn map_row(row: &Row) -> rusqlite::Result<WorkEntry> {
    let start_str: String = row.get("start_at")?;

    let start = DateTime::parse_from_rfc3339(&start_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(crate::errors::AppError::InvalidTimestamp(start_str.clone())),
            )
        })?;

    Ok(WorkEntry {
        id: row.get("id")?,
        start,
        end: None,
        notes: row.get("notes")?,
    })
}

/// Read-only peek at the open session.
pub fn current(pool: &mut DbPool) -> AppResult<Option<WorkEntry>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT id, start_at, notes FROM active_session WHERE slot = 1")?;

    let mut rows = stmt.query_map([], map_row)?;

    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

/// Occupy the slot with a freshly opened entry.
pub fn set(conn: &Connection, entry: &WorkEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO active_session (slot, id, start_at, notes)
         VALUES (1, ?1, ?2, ?3)
         ON CONFLICT(slot) DO UPDATE SET
             id       = excluded.id,
             start_at = excluded.start_at,
             notes    = excluded.notes",
        params![entry.id, entry.start.to_rfc3339(), entry.notes],
    )?;

    Ok(())
}

pub fn clear(conn: &Connection) -> AppResult<()> {
    conn.execute("DELETE FROM active_session WHERE slot = 1", [])?;
    Ok(())
}

/// Finalize the open entry and move it into the entries table atomically.
pub fn close_into_entries(conn: &mut Connection, entry: &WorkEntry) -> AppResult<()> {
    let tx = conn.transaction()?;

    entries::save(&tx, entry)?;
    clear(&tx)?;

    tx.commit()?;
    Ok(())
}
