//! One-slot state machine for the in-progress work session.
//!
//! Idle -> Running on start, Running -> Idle on stop. The stop transition
//! finalizes the entry with the supplied instant and moves it into the
//! entry store in a single transaction.

use crate::db::pool::DbPool;
use crate::db::session;
use crate::errors::{AppError, AppResult};
use crate::models::entry::WorkEntry;
use chrono::{DateTime, Local, Utc};

pub struct SessionLogic;

impl SessionLogic {
    /// Open a new session at `now`. Fails while another one is running.
    pub fn start(
        pool: &mut DbPool,
        now: DateTime<Utc>,
        notes: Option<String>,
    ) -> AppResult<WorkEntry> {
        if let Some(active) = session::current(pool)? {
            return Err(AppError::AlreadyActive(
                active
                    .start_local()
                    .format("%Y-%m-%d %H:%M")
                    .to_string(),
            ));
        }

        let entry = WorkEntry::open(now, notes);
        session::set(&pool.conn, &entry)?;

        Ok(entry)
    }

    /// Close the running session at `now` and move it into the entry store.
    pub fn stop(pool: &mut DbPool, now: DateTime<Utc>) -> AppResult<WorkEntry> {
        let mut entry = session::current(pool)?.ok_or(AppError::NoActiveSession)?;

        entry.end = Some(now);
        session::close_into_entries(&mut pool.conn, &entry)?;

        Ok(entry)
    }

    /// Read-only peek for live display; never mutates state.
    pub fn current(pool: &mut DbPool) -> AppResult<Option<WorkEntry>> {
        session::current(pool)
    }

    /// Elapsed time of the running session against a caller-supplied "now".
    pub fn elapsed_display(entry: &WorkEntry, now: DateTime<Local>) -> String {
        crate::utils::time::format_duration(entry.start, now.with_timezone(&Utc))
    }
}
