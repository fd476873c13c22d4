use crate::core::backup::BackupDocument;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::ui::messages::warning;
use crate::utils::date::today;

use std::path::PathBuf;

/// High-level export driver.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the ledger.
    ///
    /// - `format`: "json" (full backup document) or "csv" (flat entry rows)
    /// - `file`: output path; when omitted, a name embedding today's date
    ///   is generated in the current directory
    /// - `force`: overwrite without asking
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = match file {
            Some(f) => PathBuf::from(f),
            None => PathBuf::from(default_file_name(format)),
        };

        ensure_writable(&path, force)?;

        let doc = BackupDocument::gather(pool)?;

        if doc.entries.is_empty() {
            warning("The ledger is empty; exporting anyway.");
        }

        match format {
            ExportFormat::Json => export_json(&doc, &path)?,
            ExportFormat::Csv => export_csv(&doc.entries, &path)?,
        }

        Ok(path)
    }
}

/// Default export file name, date embedded: shiftledger-backup-2025-08-05.json
pub(crate) fn default_file_name(format: ExportFormat) -> String {
    format!(
        "shiftledger-backup-{}.{}",
        today().format("%Y-%m-%d"),
        format.extension()
    )
}
