//! Backup codec and raw database snapshots.
//!
//! The portable document carries the full entry collection and the
//! settings record; importing it replaces both stores wholesale in one
//! transaction. The snapshot path copies the SQLite file itself.

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{entries, settings};
use crate::errors::{AppError, AppResult};
use crate::models::entry::WorkEntry;
use crate::models::settings::Settings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

/// Portable backup document: `{ "entries": [...], "settings": {...} }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct BackupDocument {
    pub entries: Vec<WorkEntry>,
    pub settings: Settings,
}

impl BackupDocument {
    pub fn gather(pool: &mut DbPool) -> AppResult<Self> {
        Ok(Self {
            entries: entries::list(pool)?,
            settings: settings::get(pool)?,
        })
    }

    /// Decode a document, checking its shape before anything else.
    ///
    /// Both top-level fields must be present; per-entry contents are taken
    /// as exported. Any rejected document leaves existing state untouched,
    /// since decoding never writes.
    pub fn decode(raw: &str) -> AppResult<Self> {
        let value: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| AppError::InvalidBackup(format!("not valid JSON: {e}")))?;

        let obj = value
            .as_object()
            .ok_or_else(|| AppError::InvalidBackup("top level is not an object".to_string()))?;

        if !obj.contains_key("entries") {
            return Err(AppError::InvalidBackup("missing 'entries' field".to_string()));
        }
        if !obj.contains_key("settings") {
            return Err(AppError::InvalidBackup("missing 'settings' field".to_string()));
        }

        serde_json::from_value(value)
            .map_err(|e| AppError::InvalidBackup(format!("malformed record: {e}")))
    }

    pub fn encode(&self) -> AppResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))
    }

    /// Full overwrite of both stores; entries and settings land in the
    /// same transaction so a failed import applies nothing.
    pub fn apply(self, pool: &mut DbPool) -> AppResult<()> {
        let tx = pool.conn.transaction()?;

        tx.execute("DELETE FROM entries", [])?;
        for entry in &self.entries {
            entries::insert_unchecked(&tx, entry)?;
        }

        settings::set(&tx, &self.settings)?;

        tx.commit()?;
        Ok(())
    }
}

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, optionally zip-compressed.
    pub fn snapshot(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::copy(src, dest)?;

        if compress {
            let compressed = compress_snapshot(dest)?;
            if compressed != dest.to_path_buf() {
                fs::remove_file(dest)?;
            }
        }

        Ok(())
    }
}

/// Compress a snapshot using .zip
fn compress_snapshot(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "snapshot.sqlite".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(name, options).map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path)
}
