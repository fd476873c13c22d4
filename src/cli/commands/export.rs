use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let path = ExportLogic::export(&mut pool, *format, file.as_deref(), *force)?;

        let _ = log::ttlog(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            "Ledger exported",
        );
    }
    Ok(())
}
