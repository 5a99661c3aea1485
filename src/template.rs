//! Template workbook scanning.
//!
//! The LEED calculator template lists its output tables on a single sheet;
//! each table is announced by a cell reading `Table: <name>`. The matching
//! per-table workbook lives in the tables directory, named after the first
//! three words of the table name.

use crate::error::{MepError, MepResult};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Marker text announcing a table on the template sheet.
const TABLE_MARKER: &str = "Table:";

/// Sheet of the LEED template that lists the output tables.
pub const DEFAULT_SHEET: &str = "Performance_Outputs_1";

/// Tables discovered on the template sheet, in sheet order.
#[derive(Debug, Clone)]
pub struct TemplateIndex {
    pub tables: Vec<String>,
}

impl TemplateIndex {
    /// Resolve a requested table name against the scanned list,
    /// case-insensitively.
    pub fn resolve(&self, requested: &str) -> Option<&str> {
        let wanted = requested.trim().to_lowercase();
        self.tables
            .iter()
            .find(|name| name.to_lowercase() == wanted)
            .map(|name| name.as_str())
    }
}

/// Scan the template sheet for `Table:` markers.
pub fn scan_template(path: &Path, sheet: &str) -> MepResult<TemplateIndex> {
    let mut workbook = open_workbook_auto(path).map_err(|e| {
        MepError::Sheet(format!(
            "failed to open template '{}': {}",
            path.display(),
            e
        ))
    })?;
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| MepError::Sheet(format!("template sheet '{sheet}' not readable: {e}")))?;

    let mut tables: Vec<String> = Vec::new();
    for row in range.rows() {
        for cell in row {
            if let Data::String(text) = cell {
                if let Some(pos) = text.find(TABLE_MARKER) {
                    let name = text[pos + TABLE_MARKER.len()..].trim();
                    if !name.is_empty() && !tables.iter().any(|t| t == name) {
                        tables.push(name.to_string());
                    }
                }
            }
        }
    }
    Ok(TemplateIndex { tables })
}

/// Workbook file name for a table: first three words, each capitalized,
/// joined, plus `.xlsx`.
///
/// `"Baseline performance summary (EAp2)"` → `BaselinePerformanceSummary.xlsx`
pub fn workbook_file_name(table_name: &str) -> String {
    let joined: String = table_name.split_whitespace().take(3).map(capitalize).collect();
    format!("{joined}.xlsx")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
