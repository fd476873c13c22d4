use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{entries, log};
use crate::errors::{AppError, AppResult};
use crate::models::entry::WorkEntry;
use crate::ui::messages::success;
use crate::utils::date::parse_timestamp;

/// Add a completed entry, or replace an existing one with `--edit <id>`.
///
/// The whole record is replaced on edit, matching the way the entry store
/// treats a save: upsert by id, nothing merged field by field.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        start,
        end,
        notes,
        edit,
    } = cmd
    {
        let start_ts =
            parse_timestamp(start).ok_or_else(|| AppError::InvalidTimestamp(start.clone()))?;
        let end_ts = parse_timestamp(end).ok_or_else(|| AppError::InvalidTimestamp(end.clone()))?;

        // reject an inverted range before anything durable is touched
        if end_ts < start_ts {
            return Err(AppError::InvalidEntry(format!(
                "end {} is earlier than start {}",
                end, start
            )));
        }

        let mut pool = DbPool::new(&cfg.database)?;

        let entry = match edit {
            Some(id) => {
                let existing = entries::get(&mut pool, id)?
                    .ok_or_else(|| AppError::EntryNotFound(id.clone()))?;
                WorkEntry {
                    id: existing.id,
                    start: start_ts,
                    end: Some(end_ts),
                    notes: notes.clone(),
                }
            }
            None => WorkEntry::new(start_ts, end_ts, notes.clone()),
        };

        entries::save(&pool.conn, &entry)?;

        let verb = if edit.is_some() { "updated" } else { "added" };
        success(format!(
            "Entry {} ({} to {})",
            verb,
            entry.start_local().format("%Y-%m-%d %H:%M"),
            entry
                .end_local()
                .map(|e| e.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default()
        ));

        let _ = log::ttlog(&pool.conn, "add", &entry.id, "Entry saved");
    }

    Ok(())
}
