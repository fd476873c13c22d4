use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::success;
use rusqlite::Connection;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        BackupLogic::snapshot(cfg, file, *compress)?;

        success(format!("Backup created: {}", file));

        if let Ok(conn) = Connection::open(&cfg.database) {
            let _ = log::ttlog(
                &conn,
                "backup",
                file,
                if *compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }
    }

    Ok(())
}
