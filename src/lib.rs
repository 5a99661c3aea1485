//! MEP Calculator - LEED energy-performance reporting from DOE-2 SIM files
//!
//! This library parses the PS-E ("Energy End-Use Summary") pages of DOE-2
//! SIM report files, one file per baseline building rotation, and writes the
//! extracted figures into the LEED calculator's report tables.
//!
//! # Features
//!
//! - PS-E end-use parsing with multi-meter accumulation
//! - Name-keyed report-table updates (no hard-coded row offsets)
//! - Four-rotation baseline average column
//! - CSV and Excel (.xlsx) report output
//!
//! # Example
//!
//! ```no_run
//! use mepcalc::sim::parse_pse_report;
//! use std::path::Path;
//!
//! let report = parse_pse_report(Path::new("baseline_000.sim"))?;
//! if let Some(lights) = report.get("LIGHTS") {
//!     println!("interior lighting: {} kWh, {} kW peak", lights.energy_kwh, lights.demand_kw);
//! }
//! # Ok::<(), mepcalc::error::MepError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod mapping;
pub mod report;
pub mod sim;
pub mod template;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{MepError, MepResult};
pub use types::{CellValue, EndUseTotals, Metric, PseReport, Rotation, TableDoc, TableRow};
