// src/export/model.rs

use crate::models::ClockRecord;

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Time Clock Records";

/// Download name used by the HTTP export.
pub const EXPORT_FILE_NAME: &str = "time_clock_records.xlsx";

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Header row shared by XLSX and CSV.
pub const HEADERS: [&str; 3] = ["Employee", "Type", "Time"];

/// One record as its three text cells.
pub(crate) fn record_to_row(r: &ClockRecord) -> [String; 3] {
    [
        r.employee_name.clone(),
        r.kind.to_string(),
        r.timestamp.clone(),
    ]
}
