//! PS-E "Energy End-Use Summary" parser.
//!
//! Each PS-E page carries one meter's end-use summary:
//!
//! ```text
//! REPORT- PS-E Energy End-Use Summary for EM1 (ELECTRICITY)  WEATHER FILE- ...
//! ---------------------------------------------------------------------------
//!
//!                                      KWH      MAX KW    PEAK END USE
//!
//!   LIGHTS                          160038.       45.60
//!   SPACE COOLING                    85210.      120.40
//!   PUMPS & AUX                      11025.        5.40
//!                                 ---------   ---------
//!   TOTAL                           558418.      264.00
//! ```
//!
//! A category row is an upper-case label separated from the numeric columns
//! by at least two spaces; the first numeric column is annual energy, the
//! second peak demand. Only electricity blocks (column caption `KWH`) are
//! read; fuel meters report in THERM/MBTU and feed other parts of the LEED
//! workbook.

use crate::error::{MepError, MepResult};
use crate::types::PseReport;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Captions that mark a PS-E block as a fuel meter.
const FUEL_UNITS: &[&str] = &["THERM", "MBTU", "GAL"];

/// Parse the PS-E end-use summary from a SIM file on disk.
pub fn parse_pse_report(path: &Path) -> MepResult<PseReport> {
    let content = fs::read_to_string(path)
        .map_err(|e| MepError::Sim(format!("failed to read '{}': {}", path.display(), e)))?;
    parse_pse_text(&content).map_err(|e| match e {
        MepError::Sim(msg) => MepError::Sim(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

/// Parse PS-E blocks out of report text.
///
/// Categories accumulate across electricity meters: energy adds, peak demand
/// keeps the largest single-meter value (meter peaks are non-coincident, so
/// adding them would fabricate a building peak).
pub fn parse_pse_text(content: &str) -> MepResult<PseReport> {
    let header_re = Regex::new(r"REPORT-\s+PS-E\s+Energy End-Use Summary for\s+(\S+)")
        .map_err(|e| MepError::Sim(format!("bad header pattern: {e}")))?;
    let row_re = Regex::new(r"^\s*([A-Z][A-Z0-9&/.\- ]*?)\s{2,}(-?[\d,]+\.?\d*)\s+(-?[\d,]+\.?\d*)")
        .map_err(|e| MepError::Sim(format!("bad row pattern: {e}")))?;

    let mut report = PseReport::default();
    // Inside a PS-E page, before/after the column caption line.
    let mut in_block = false;
    let mut reading = false;

    for line in content.lines() {
        if line.contains("REPORT-") {
            if let Some(caps) = header_re.captures(line) {
                let meter = caps[1].to_string();
                if !report.meters.contains(&meter) {
                    report.meters.push(meter);
                }
                in_block = true;
            } else {
                in_block = false;
            }
            reading = false;
            continue;
        }
        if !in_block {
            continue;
        }
        if !reading {
            // The first caption line inside the block names its units.
            let upper = line.to_uppercase();
            if upper.contains("KWH") {
                reading = true;
            } else if FUEL_UNITS.iter().any(|unit| upper.contains(unit)) {
                in_block = false;
            }
            continue;
        }
        if let Some(caps) = row_re.captures(line) {
            let name = caps[1].trim().to_string();
            if name == "TOTAL" || name == "TOTALS" {
                in_block = false;
                reading = false;
                continue;
            }
            let energy = parse_report_number(&caps[2])?;
            let demand = parse_report_number(&caps[3])?;
            report.accumulate(&name, energy, demand);
        }
    }

    if report.is_empty() {
        return Err(MepError::Sim(
            "no PS-E end-use summary found (is this a SIM report file?)".to_string(),
        ));
    }
    Ok(report)
}

/// DOE-2 prints numbers like `160,038.` — strip the separators, keep the rest.
fn parse_report_number(raw: &str) -> MepResult<f64> {
    raw.replace(',', "")
        .parse::<f64>()
        .map_err(|_| MepError::Sim(format!("unreadable number '{raw}' in PS-E row")))
}
