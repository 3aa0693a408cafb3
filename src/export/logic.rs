// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::db::queries::list_clock_events_joined;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::{build_workbook, export_xlsx};
use crate::models::RecordOrder;
use crate::ui::messages::{info, warning};
use std::path::Path;

/// High-level export of the joined clock records, oldest first.
pub struct ExportLogic;

impl ExportLogic {
    /// Spreadsheet bytes for the HTTP download.
    pub fn xlsx_bytes(pool: &DbPool) -> AppResult<Vec<u8>> {
        let records = list_clock_events_joined(&pool.conn, RecordOrder::OldestFirst)?;
        build_workbook(&records)
    }

    /// Write the records to `path` in the requested format.
    ///
    /// An empty record set still produces a file (header only for XLSX/CSV).
    pub fn export(pool: &DbPool, format: ExportFormat, path: &Path, force: bool) -> AppResult<()> {
        ensure_writable(path, force)?;

        let records = list_clock_events_joined(&pool.conn, RecordOrder::OldestFirst)?;

        if records.is_empty() {
            warning("No clock records found, exporting header only.");
        } else {
            info(format!("Exporting {} records as {}", records.len(), format.as_str()));
        }

        match format {
            ExportFormat::Xlsx => export_xlsx(&records, path)?,
            ExportFormat::Csv => export_csv(&records, path)?,
            ExportFormat::Json => export_json(&records, path)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::db::queries::{create_employee, insert_clock_event_at};
    use crate::models::{EventKind, NewEmployee};
    use std::fs;

    fn seeded() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        let id = create_employee(
            &pool.conn,
            &NewEmployee {
                name: "Ana".into(),
                badge_number: "123".into(),
                role: "Clerk".into(),
            },
        )
        .unwrap();
        insert_clock_event_at(&pool.conn, id, EventKind::Exit, "2025-03-01 17:00:00").unwrap();
        insert_clock_event_at(&pool.conn, id, EventKind::Entrance, "2025-03-01 09:00:00")
            .unwrap();
        pool
    }

    #[test]
    fn csv_export_is_oldest_first_with_header() {
        let pool = seeded();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");

        ExportLogic::export(&pool, ExportFormat::Csv, &path, false).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Employee,Type,Time",
                "Ana,entrance,2025-03-01 09:00:00",
                "Ana,exit,2025-03-01 17:00:00",
            ]
        );
    }

    #[test]
    fn json_export_uses_record_fields() {
        let pool = seeded();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");

        ExportLogic::export(&pool, ExportFormat::Json, &path, false).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value[0]["employee_name"], "Ana");
        assert_eq!(value[0]["kind"], "entrance");
        assert_eq!(value[1]["timestamp"], "2025-03-01 17:00:00");
    }

    #[test]
    fn force_overwrites_existing_file() {
        let pool = seeded();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");
        fs::write(&path, "old").unwrap();

        ExportLogic::export(&pool, ExportFormat::Csv, &path, true).unwrap();

        assert!(fs::read_to_string(&path).unwrap().starts_with("Employee,Type,Time"));
    }

    #[test]
    fn xlsx_bytes_is_a_zip_container() {
        let pool = seeded();
        let bytes = ExportLogic::xlsx_bytes(&pool).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
