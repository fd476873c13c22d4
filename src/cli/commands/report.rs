use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::period;
use crate::core::report::{aggregate, share_line};
use crate::db::pool::DbPool;
use crate::db::{entries, settings};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::{bold, format_currency, format_hours};
use crate::utils::table::Table;
use crate::utils::time::{format_duration, hours_between};
use chrono::Local;

/// Aggregate hours and earnings for one of the four calendar periods.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { period: kind, share } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let all = entries::list(&mut pool)?;
        let rate = settings::get(&mut pool)?.hourly_rate;

        // "now" is snapshotted once so the whole report is consistent
        let resolved = period::resolve(*kind, Local::now());
        let report = aggregate(&all, &resolved, rate);

        if *share {
            println!("{}", share_line(&report, &cfg.currency_symbol));
            return Ok(());
        }

        println!("\n{}", bold(&format!("=== {} ===", report.period_label)));

        if report.period_entries.is_empty() {
            info("No entries in this period.");
            return Ok(());
        }

        let mut table = Table::new(vec!["Date", "Start", "End", "Duration", "Earnings"]);

        for entry in &report.period_entries {
            // aggregate() only hands back closed, well-ordered entries
            let Some(end) = entry.end else { continue };

            let start_local = entry.start_local();
            table.add_row(vec![
                start_local.format("%Y-%m-%d").to_string(),
                start_local.format("%H:%M").to_string(),
                entry
                    .end_local()
                    .map(|e| e.format("%H:%M").to_string())
                    .unwrap_or_default(),
                format_duration(entry.start, end),
                format_currency(&cfg.currency_symbol, hours_between(entry.start, end) * rate),
            ]);
        }

        table.set_footer(vec![
            "Total".to_string(),
            String::new(),
            String::new(),
            format_hours(report.total_hours),
            format_currency(&cfg.currency_symbol, report.total_earnings),
        ]);

        print!("{}", table.render());
    }

    Ok(())
}
