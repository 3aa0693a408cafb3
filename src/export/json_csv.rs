// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{HEADERS, record_to_row};
use crate::export::notify_export_success;
use crate::models::ClockRecord;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(records: &[ClockRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with the same header row as the spreadsheet.
pub(crate) fn export_csv(records: &[ClockRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(HEADERS)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for r in records {
        wtr.write_record(record_to_row(r))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
