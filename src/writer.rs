//! CSV output for finalized report tables.

use crate::error::MepResult;
use crate::types::{CellValue, TableDoc};
use std::path::Path;

/// Write the finalized table as a CSV file, header row first.
pub fn write_csv(table: &TableDoc, path: &Path) -> MepResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        let record: Vec<String> = row.cells.iter().map(format_cell).collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Render one cell for CSV output.
pub fn format_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Empty => String::new(),
        CellValue::Number(n) => format_number(*n),
        CellValue::Text(t) => t.clone(),
        CellValue::Bool(b) => b.to_string(),
    }
}

/// Format a number for display, removing unnecessary decimal places
pub fn format_number(n: f64) -> String {
    // Round to 6 decimal places; this also hides float artifacts from the
    // four-way average.
    let rounded = (n * 1e6).round() / 1e6;
    format!("{:.6}", rounded)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
