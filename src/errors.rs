//! Unified application error type.
//! All modules (storage, core, cli, utils) return AppError to keep the error
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
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Snapshot serialization error: {0}")]
    Snapshot(#[from] serde_json::Error),

    // ---------------------------
    // Form validation
    // ---------------------------
    #[error("Please fill in all required fields (missing: {0})")]
    MissingField(&'static str),

    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Clock-out time must be later than clock-in time")]
    TimeOutNotAfterTimeIn,

    #[error("Lunch end must be later than lunch start")]
    LunchOutNotAfterLunchIn,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Nothing to export: no entries match the selected filter")]
    NothingToExport,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
