//! XLSX export of the finalized report table.

use crate::error::{MepError, MepResult};
use crate::types::{CellValue, TableDoc};
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Excel caps worksheet names at 31 characters.
const SHEET_NAME_MAX: usize = 31;

/// Write the finalized table to a single-worksheet .xlsx file.
pub fn export_xlsx(table: &TableDoc, output_path: &Path) -> MepResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name(&table.name))
        .map_err(|e| MepError::Export(format!("failed to set worksheet name: {e}")))?;

    for (col_idx, header) in table.headers.iter().enumerate() {
        worksheet
            .write_string(0, col_idx as u16, header)
            .map_err(|e| MepError::Export(format!("failed to write header: {e}")))?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let excel_row = (row_idx + 1) as u32;
        for (col_idx, cell) in row.cells.iter().enumerate() {
            let col = col_idx as u16;
            match cell {
                CellValue::Number(n) => worksheet.write_number(excel_row, col, *n),
                CellValue::Text(t) => worksheet.write_string(excel_row, col, t),
                CellValue::Bool(b) => worksheet.write_boolean(excel_row, col, *b),
                CellValue::Empty => continue,
            }
            .map_err(|e| MepError::Export(format!("failed to write cell: {e}")))?;
        }
    }

    workbook.save(output_path).map_err(|e| {
        MepError::Export(format!("failed to save '{}': {}", output_path.display(), e))
    })?;
    Ok(())
}

/// Worksheet-safe table name: drop characters Excel rejects, cap the length.
fn sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => ' ',
            other => other,
        })
        .collect();
    cleaned.trim().chars().take(SHEET_NAME_MAX).collect()
}
