use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use chrono::Local;
use std::thread;
use std::time::Duration;

/// Show the running session and its elapsed time.
///
/// With `--watch` the line is refreshed on a 1-second tick until the
/// process is interrupted; the tick only re-reads "now" for display and
/// never touches durable state.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { watch } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        if !*watch {
            print_status(&mut pool)?;
            return Ok(());
        }

        loop {
            if !print_status(&mut pool)? {
                // nothing running, no point ticking
                return Ok(());
            }
            thread::sleep(Duration::from_secs(1));
        }
    }

    Ok(())
}

/// Returns true while a session is running.
fn print_status(pool: &mut DbPool) -> AppResult<bool> {
    match SessionLogic::current(pool)? {
        Some(entry) => {
            let now = Local::now();
            println!(
                "▶ Running since {} ({} elapsed){}",
                entry.start_local().format("%Y-%m-%d %H:%M"),
                SessionLogic::elapsed_display(&entry, now),
                entry
                    .notes
                    .as_deref()
                    .map(|n| format!(" - {}", n))
                    .unwrap_or_default()
            );
            Ok(true)
        }
        None => {
            info("No session is currently running.");
            Ok(false)
        }
    }
}
