use crate::error::{MepError, MepResult};
use serde::Serialize;
use std::fmt;

//==============================================================================
// Rotations
//==============================================================================

/// One of the four cardinal baseline rotations simulated for LEED reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// All four rotations, in reporting order.
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    pub fn degrees(self) -> u16 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }

    /// Column header the report tables use for this rotation.
    pub fn column_label(self) -> &'static str {
        match self {
            Rotation::R0 => "Baseline 0° rotation",
            Rotation::R90 => "Baseline 90° rotation",
            Rotation::R180 => "Baseline 180° rotation",
            Rotation::R270 => "Baseline 270° rotation",
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

//==============================================================================
// PS-E end-use summary
//==============================================================================

/// Which of the two reported figures a table row carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Annual energy, kWh
    Energy,
    /// Peak demand, kW
    Demand,
}

impl Metric {
    /// Detect the metric from a units cell ("kWh", "(kW)", "kW peak", ...).
    pub fn from_unit_text(text: &str) -> Option<Metric> {
        let t = text.to_lowercase();
        if t.contains("kwh") {
            Some(Metric::Energy)
        } else if t.contains("kw") {
            Some(Metric::Demand)
        } else {
            None
        }
    }
}

/// Annual figures for one end-use category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndUseTotals {
    /// Category label exactly as printed in the report (e.g. "PUMPS & AUX")
    pub name: String,
    pub energy_kwh: f64,
    pub demand_kw: f64,
}

/// Parsed PS-E end-use summary for one SIM file.
///
/// Categories keep the report's own row order and verbatim labels.
#[derive(Debug, Default, Serialize)]
pub struct PseReport {
    /// Electricity meters the summary was read from (e.g. "EM1")
    pub meters: Vec<String>,
    pub categories: Vec<EndUseTotals>,
}

impl PseReport {
    /// Look up a category by its exact report label.
    pub fn get(&self, name: &str) -> Option<&EndUseTotals> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Fold one meter's row into the running totals. Energy adds across
    /// meters; demand keeps the largest single-meter peak.
    pub fn accumulate(&mut self, name: &str, energy_kwh: f64, demand_kw: f64) {
        if let Some(entry) = self.categories.iter_mut().find(|c| c.name == name) {
            entry.energy_kwh += energy_kwh;
            entry.demand_kw = entry.demand_kw.max(demand_kw);
        } else {
            self.categories.push(EndUseTotals {
                name: name.to_string(),
                energy_kwh,
                demand_kw,
            });
        }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

//==============================================================================
// Report tables
//==============================================================================

/// A single spreadsheet cell as read from a table workbook.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl CellValue {
    /// Numeric view used by the rotation average; numeric-looking text
    /// coerces, everything else counts as missing.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(t) => t.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

/// One data row of a report table.
#[derive(Debug, Clone)]
pub struct TableRow {
    /// Raw text of the row-label column (may be blank on subrows)
    pub label: String,
    /// End-use label after forward-filling blank label cells
    pub end_use: Option<String>,
    /// kWh or kW, from the units column
    pub metric: Option<Metric>,
    /// Full-width cells, aligned with the table headers
    pub cells: Vec<CellValue>,
}

/// A report table: header row plus keyed data rows.
#[derive(Debug, Clone)]
pub struct TableDoc {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl TableDoc {
    pub fn new(name: String) -> Self {
        Self {
            name,
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Index of the column with the given header, ignoring surrounding space.
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == header.trim())
    }

    /// Column indices of the four baseline rotation columns, in rotation
    /// order. All four must be present.
    pub fn rotation_columns(&self) -> MepResult<[usize; 4]> {
        let mut indices = [0usize; 4];
        for (slot, rotation) in indices.iter_mut().zip(Rotation::ALL) {
            *slot = self.column_index(rotation.column_label()).ok_or_else(|| {
                MepError::Validation(format!(
                    "table '{}' has no '{}' column",
                    self.name,
                    rotation.column_label()
                ))
            })?;
        }
        Ok(indices)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
