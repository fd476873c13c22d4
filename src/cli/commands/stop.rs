use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::parse_timestamp;
use crate::utils::time::format_duration;
use chrono::Utc;

/// Close the running session and file it into the ledger.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stop { at } = cmd {
        let now = match at {
            Some(s) => parse_timestamp(s).ok_or_else(|| AppError::InvalidTimestamp(s.clone()))?,
            None => Utc::now(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let entry = SessionLogic::stop(&mut pool, now)?;

        // stop() only returns closed entries
        if let Some(end) = entry.end {
            success(format!(
                "Session stopped: {} logged ({} to {})",
                format_duration(entry.start, end),
                entry.start_local().format("%H:%M"),
                entry.end_local().map(|e| e.format("%H:%M").to_string()).unwrap_or_default()
            ));
        }

        let _ = log::ttlog(&pool.conn, "stop", &entry.id, "Session stopped and filed");
    }

    Ok(())
}
