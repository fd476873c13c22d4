use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::entries;
use crate::db::pool::DbPool;
use crate::db::settings;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::format_currency;
use crate::utils::table::Table;
use crate::utils::time::{format_duration, hours_between};

/// Print the ledger, most recent entry first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { limit } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let all = entries::list(&mut pool)?;
        let rate = settings::get(&mut pool)?.hourly_rate;

        if all.is_empty() {
            info("The ledger is empty.");
            return Ok(());
        }

        let shown = match limit {
            Some(n) => &all[..all.len().min(*n)],
            None => &all[..],
        };

        let mut table = Table::new(vec!["Id", "Date", "Start", "End", "Duration", "Earnings", "Notes"]);

        for entry in shown {
            let start_local = entry.start_local();
            let (end_str, duration, earnings) = match entry.end {
                Some(end) => (
                    entry
                        .end_local()
                        .map(|e| e.format("%H:%M").to_string())
                        .unwrap_or_default(),
                    format_duration(entry.start, end),
                    format_currency(&cfg.currency_symbol, hours_between(entry.start, end) * rate),
                ),
                None => ("-".to_string(), "-".to_string(), "-".to_string()),
            };

            table.add_row(vec![
                entry.id.clone(),
                start_local.format("%Y-%m-%d").to_string(),
                start_local.format("%H:%M").to_string(),
                end_str,
                duration,
                earnings,
                entry.notes.clone().unwrap_or_default(),
            ]);
        }

        print!("{}", table.render());

        if shown.len() < all.len() {
            info(format!("Showing {} of {} entries.", shown.len(), all.len()));
        }
    }

    Ok(())
}
