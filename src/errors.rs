//! Unified application error type.
//! All modules (db, core, export, server, cli) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Input errors
    // ---------------------------
    #[error("Invalid type: {0}")]
    InvalidEventKind(String),

    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Runtime errors
    // ---------------------------
    #[error("Background task failed: {0}")]
    Task(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        AppError::Export(e.to_string())
    }
}
