// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::model::{HEADERS, SHEET_NAME, record_to_row};
use crate::export::notify_export_success;
use crate::models::ClockRecord;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::fs;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Build the single-sheet workbook in memory.
///
/// Row 0 is always the header; records follow in the given order, every
/// cell written as text.
pub fn build_workbook(records: &[ClockRecord]) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = HEADERS.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, rec) in records.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in record_to_row(rec).iter().enumerate() {
            write_text_cell(worksheet, row, col as u16, value, band_color)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Export XLSX to a file on disk.
pub(crate) fn export_xlsx(records: &[ClockRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let bytes = build_workbook(records)?;
    fs::write(path, bytes)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_text_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    let fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    worksheet.write_string_with_format(row, col, s, &fmt)?;
    Ok(())
}
