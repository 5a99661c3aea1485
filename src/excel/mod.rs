//! Spreadsheet I/O for the report tables.
//!
//! Reading uses calamine (template and per-table workbooks); writing uses
//! rust_xlsxwriter for the optional XLSX copy of the finalized report.

mod exporter;
mod reader;

pub use exporter::export_xlsx;
pub use reader::TableReader;
