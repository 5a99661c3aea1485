//! Table workbook loading.

use crate::error::{MepError, MepResult};
use crate::types::{CellValue, Metric, TableDoc, TableRow};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Reads a per-table workbook into a [`TableDoc`].
///
/// Row 0 of the used range is the header row and column 0 carries the row
/// labels. The units column (first header containing "unit", falling back to
/// the second column) decides whether a row carries annual kWh or peak kW.
/// Blank label cells inherit the label above them, so a category's kW subrow
/// keys to the same end use as its kWh row.
pub struct TableReader {
    path: std::path::PathBuf,
}

impl TableReader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the workbook's first worksheet as a keyed table.
    pub fn read(&self, table_name: &str) -> MepResult<TableDoc> {
        let mut workbook = open_workbook_auto(&self.path).map_err(|e| {
            MepError::Sheet(format!(
                "failed to open table workbook '{}': {}",
                self.path.display(),
                e
            ))
        })?;
        let sheet_names = workbook.sheet_names().to_vec();
        let first = sheet_names.first().ok_or_else(|| {
            MepError::Sheet(format!("'{}' has no worksheets", self.path.display()))
        })?;
        let range = workbook
            .worksheet_range(first)
            .map_err(|e| MepError::Sheet(format!("worksheet '{first}' not readable: {e}")))?;

        let (height, width) = range.get_size();
        if height < 2 || width == 0 {
            return Err(MepError::Sheet(format!(
                "table workbook '{}' needs a header row and at least one data row",
                self.path.display()
            )));
        }

        let mut doc = TableDoc::new(table_name.to_string());
        for col in 0..width {
            doc.headers.push(match range.get((0, col)) {
                Some(Data::String(s)) => s.trim().to_string(),
                Some(Data::Int(i)) => i.to_string(),
                Some(Data::Float(f)) => f.to_string(),
                _ => String::new(),
            });
        }

        let units_col = doc
            .headers
            .iter()
            .position(|h| h.to_lowercase().contains("unit"))
            .unwrap_or(1);

        let mut carried_label: Option<String> = None;
        for row in 1..height {
            let mut cells = Vec::with_capacity(width);
            for col in 0..width {
                cells.push(convert_cell(range.get((row, col))));
            }

            let label = match cells.first() {
                Some(CellValue::Text(t)) => t.trim().to_string(),
                Some(CellValue::Number(n)) => n.to_string(),
                _ => String::new(),
            };
            if !label.is_empty() {
                carried_label = Some(label.clone());
            }

            let metric = cells.get(units_col).and_then(|cell| match cell {
                CellValue::Text(t) => Metric::from_unit_text(t),
                _ => None,
            });

            doc.rows.push(TableRow {
                label,
                end_use: carried_label.clone(),
                metric,
                cells,
            });
        }
        Ok(doc)
    }
}

/// Convert a calamine cell to our cell model.
fn convert_cell(data: Option<&Data>) -> CellValue {
    match data {
        Some(Data::Float(f)) => CellValue::Number(*f),
        Some(Data::Int(i)) => CellValue::Number(*i as f64),
        Some(Data::String(s)) if s.trim().is_empty() => CellValue::Empty,
        Some(Data::String(s)) => CellValue::Text(s.clone()),
        Some(Data::Bool(b)) => CellValue::Bool(*b),
        Some(Data::DateTime(dt)) => CellValue::Number(dt.as_f64()),
        Some(Data::DateTimeIso(s)) | Some(Data::DurationIso(s)) => CellValue::Text(s.clone()),
        Some(Data::Error(_)) | Some(Data::Empty) | None => CellValue::Empty,
    }
}
