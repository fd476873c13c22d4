use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::parse_timestamp;
use chrono::Utc;

/// Open a new work session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { notes, at } = cmd {
        let now = match at {
            Some(s) => parse_timestamp(s).ok_or_else(|| AppError::InvalidTimestamp(s.clone()))?,
            None => Utc::now(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let entry = SessionLogic::start(&mut pool, now, notes.clone())?;

        success(format!(
            "Session started at {}",
            entry.start_local().format("%Y-%m-%d %H:%M")
        ));

        let _ = log::ttlog(&pool.conn, "start", &entry.id, "Session started");
    }

    Ok(())
}
