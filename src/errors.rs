//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date/time: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid rate: {0}")]
    InvalidRate(String),

    // ---------------------------
    // Entry validation
    // ---------------------------
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("No entry found with id {0}")]
    EntryNotFound(String),

    // ---------------------------
    // Session state machine
    // ---------------------------
    #[error("A work session is already running (started {0})")]
    AlreadyActive(String),

    #[error("No work session is currently running")]
    NoActiveSession,

    // ---------------------------
    // Backup / import
    // ---------------------------
    #[error("Invalid backup document: {0}")]
    InvalidBackup(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
