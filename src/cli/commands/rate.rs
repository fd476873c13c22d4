use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{log, settings};
use crate::errors::{AppError, AppResult};
use crate::models::settings::Settings;
use crate::ui::messages::success;
use crate::utils::formatting::format_currency;

/// Show or update the hourly rate.
///
/// The value is stored as given, negative included; the aggregation layer
/// tolerates it, so rejecting here would only mask what the user typed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rate { set } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match set {
            Some(raw) => {
                let hourly_rate: f64 = raw
                    .parse()
                    .map_err(|_| AppError::InvalidRate(raw.clone()))?;

                if !hourly_rate.is_finite() {
                    return Err(AppError::InvalidRate(raw.clone()));
                }

                settings::set(&pool.conn, &Settings { hourly_rate })?;

                success(format!(
                    "Hourly rate set to {}",
                    format_currency(&cfg.currency_symbol, hourly_rate)
                ));

                let _ = log::ttlog(&pool.conn, "rate", raw, "Hourly rate updated");
            }
            None => {
                let current = settings::get(&mut pool)?;
                println!(
                    "Hourly rate: {}",
                    format_currency(&cfg.currency_symbol, current.hourly_rate)
                );
            }
        }
    }

    Ok(())
}
