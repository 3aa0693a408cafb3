// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod xlsx;

pub use logic::ExportLogic;
pub use model::{EXPORT_FILE_NAME, XLSX_MIME};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for file exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
