use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::entry::WorkEntry;
use crate::ui::messages::info;
use crate::utils::time::{format_duration, hours_between};
use std::io;
use std::path::Path;

/// Flat per-entry rows for spreadsheet use.
pub(crate) fn export_csv(entries: &[WorkEntry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV open error: {e}"))))?;

    wtr.write_record(["id", "start", "end", "duration", "hours", "notes"])
        .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;

    for entry in entries {
        let (end, duration, hours) = match entry.end {
            Some(end) => (
                end.to_rfc3339(),
                format_duration(entry.start, end),
                format!("{:.4}", hours_between(entry.start, end)),
            ),
            None => (String::new(), String::new(), String::new()),
        };

        let row = [
            entry.id.clone(),
            entry.start.to_rfc3339(),
            end,
            duration,
            hours,
            entry.notes.clone().unwrap_or_default(),
        ];

        wtr.write_record(&row)
            .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;
    }

    wtr.flush()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))?;

    notify_export_success("CSV", path);
    Ok(())
}
