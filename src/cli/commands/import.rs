use crate::cli::commands::{ask_confirmation, cancelled};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupDocument;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::fs;

/// Restore a backup document, replacing entries and settings wholesale.
///
/// The document is decoded and validated before the database is touched;
/// a rejected file leaves every store exactly as it was.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, yes } = cmd {
        if !*yes
            && !ask_confirmation(&format!(
                "Importing '{}' replaces ALL entries and settings. Continue?",
                file
            ))
        {
            cancelled();
            return Ok(());
        }

        let raw = fs::read_to_string(file)?;
        let doc = BackupDocument::decode(&raw)?;

        let entry_count = doc.entries.len();

        let mut pool = DbPool::new(&cfg.database)?;
        doc.apply(&mut pool)?;

        success(format!(
            "Imported {} entries and settings from {}.",
            entry_count, file
        ));

        let _ = log::ttlog(&pool.conn, "import", file, "Backup document imported");
    }

    Ok(())
}
