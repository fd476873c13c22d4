use crate::cli::commands::{ask_confirmation, cancelled};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{entries, log};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        if !*yes
            && !ask_confirmation(&format!(
                "Delete entry {}? This action is irreversible.",
                id
            ))
        {
            cancelled();
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;

        // deleting an unknown id is not an error
        let removed = entries::delete(&pool.conn, id)?;

        if removed > 0 {
            success(format!("Entry {} has been deleted.", id));
            let _ = log::ttlog(&pool.conn, "del", id, "Entry deleted");
        } else {
            info(format!("No entry found with id {}.", id));
        }
    }

    Ok(())
}
