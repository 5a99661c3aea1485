//! Rotation merge and the four-rotation average.

use crate::error::{MepError, MepResult};
use crate::mapping::EndUseMap;
use crate::types::{CellValue, Metric, PseReport, Rotation, TableDoc, TableRow};

/// Header of the computed output column.
pub const AVERAGE_COLUMN: &str = "Baseline Design Total (Average of 4 rotations)";

/// Write one rotation's parsed figures into its table column.
///
/// Rows are addressed by name: the forward-filled end-use label picks the
/// PS-E category through the map, and the units column picks energy vs
/// demand. Rows without a mapping, a metric, or a reported category keep
/// their template values. Returns the number of cells written.
pub fn apply_rotation(
    table: &mut TableDoc,
    rotation: Rotation,
    report: &PseReport,
    map: &EndUseMap,
) -> MepResult<usize> {
    let col = table.column_index(rotation.column_label()).ok_or_else(|| {
        MepError::Validation(format!(
            "table '{}' has no '{}' column",
            table.name,
            rotation.column_label()
        ))
    })?;

    let mut written = 0;
    for row in &mut table.rows {
        let end_use = match row.end_use.as_deref() {
            Some(label) => label,
            None => continue,
        };
        let metric = match row.metric {
            Some(metric) => metric,
            None => continue,
        };
        let totals = match map.category_for(end_use).and_then(|c| report.get(c)) {
            Some(totals) => totals,
            None => continue,
        };
        let value = match metric {
            Metric::Energy => totals.energy_kwh,
            Metric::Demand => totals.demand_kw,
        };
        row.cells[col] = CellValue::Number(value);
        written += 1;
    }
    Ok(written)
}

/// Assemble the output table: the row-label column, the four rotation
/// columns, and the appended average column. Everything else the template
/// carries (units, proposed-design columns, notes) is dropped.
///
/// The average at every row is the sum of the numeric values among the four
/// rotation cells divided by four; non-numeric cells contribute nothing.
pub fn finalize(table: &TableDoc) -> MepResult<TableDoc> {
    let rotation_cols = table.rotation_columns()?;

    let mut out = TableDoc::new(table.name.clone());
    out.headers
        .push(table.headers.first().cloned().unwrap_or_default());
    for rotation in Rotation::ALL {
        out.headers.push(rotation.column_label().to_string());
    }
    out.headers.push(AVERAGE_COLUMN.to_string());

    for row in &table.rows {
        let mut cells = Vec::with_capacity(out.headers.len());
        cells.push(row.cells.first().cloned().unwrap_or(CellValue::Empty));

        let mut sum = 0.0;
        for &idx in &rotation_cols {
            let cell = row.cells.get(idx).cloned().unwrap_or(CellValue::Empty);
            if let Some(n) = cell.as_number() {
                sum += n;
            }
            cells.push(cell);
        }
        cells.push(CellValue::Number(sum / Rotation::ALL.len() as f64));

        out.rows.push(TableRow {
            label: row.label.clone(),
            end_use: row.end_use.clone(),
            metric: row.metric,
            cells,
        });
    }
    Ok(out)
}
