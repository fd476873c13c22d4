//! Settings store: a single durable record holding the hourly rate.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::settings::Settings;
use rusqlite::{Connection, OptionalExtension, params};

/// Current settings; the default record is materialized on first read.
pub fn get(pool: &mut DbPool) -> AppResult<Settings> {
    let rate: Option<f64> = pool
        .conn
        .query_row("SELECT hourly_rate FROM settings WHERE slot = 1", [], |row| {
            row.get(0)
        })
        .optional()?;

    Ok(match rate {
        Some(hourly_rate) => Settings { hourly_rate },
        None => Settings::default(),
    })
}

/// Last-write-wins replacement of the settings record.
/// The rate is stored as given; clamping belongs to the input boundary.
pub fn set(conn: &Connection, settings: &Settings) -> AppResult<()> {
    conn.execute(
        "INSERT INTO settings (slot, hourly_rate) VALUES (1, ?1)
         ON CONFLICT(slot) DO UPDATE SET hourly_rate = excluded.hourly_rate",
        params![settings.hourly_rate],
    )?;

    Ok(())
}
