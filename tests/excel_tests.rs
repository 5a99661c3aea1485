//! Table workbook read/write tests

use mepcalc::excel::{export_xlsx, TableReader};
use mepcalc::types::{CellValue, Metric, TableDoc, TableRow};
use pretty_assertions::assert_eq;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tempfile::TempDir;

/// Lay down a small baseline table workbook the way the LEED template
/// ships them: label column, units column, four rotation columns, extras.
fn write_fixture(path: &Path) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let headers = [
        "End Use",
        "Units",
        "Baseline 0° rotation",
        "Baseline 90° rotation",
        "Baseline 180° rotation",
        "Baseline 270° rotation",
        "Proposed design",
    ];
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }

    // Interior lighting: kWh row, then a kW subrow with a blank label
    worksheet.write_string(1, 0, "Interior lighting").unwrap();
    worksheet.write_string(1, 1, "kWh").unwrap();
    worksheet.write_number(1, 2, 160038.0).unwrap();
    worksheet.write_string(2, 1, "kW").unwrap();
    worksheet.write_number(2, 2, 45.6).unwrap();

    worksheet.write_string(3, 0, "Section subtotal").unwrap();

    workbook.save(path).unwrap();
}

#[test]
fn test_read_headers_and_cells() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("BaselinePerformanceSummary.xlsx");
    write_fixture(&path);

    let doc = TableReader::new(&path).read("Baseline performance summary").unwrap();

    assert_eq!(doc.name, "Baseline performance summary");
    assert_eq!(doc.headers[0], "End Use");
    assert_eq!(doc.headers[2], "Baseline 0° rotation");
    assert_eq!(doc.row_count(), 3);
    assert_eq!(doc.rows[0].cells[2], CellValue::Number(160038.0));
}

#[test]
fn test_blank_labels_forward_fill() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("table.xlsx");
    write_fixture(&path);

    let doc = TableReader::new(&path).read("t").unwrap();

    assert_eq!(doc.rows[0].end_use.as_deref(), Some("Interior lighting"));
    assert_eq!(doc.rows[0].label, "Interior lighting");
    // The kW subrow has no label of its own but keys to the same end use
    assert_eq!(doc.rows[1].label, "");
    assert_eq!(doc.rows[1].end_use.as_deref(), Some("Interior lighting"));
}

#[test]
fn test_units_column_picks_the_metric() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("table.xlsx");
    write_fixture(&path);

    let doc = TableReader::new(&path).read("t").unwrap();

    assert_eq!(doc.rows[0].metric, Some(Metric::Energy));
    assert_eq!(doc.rows[1].metric, Some(Metric::Demand));
    assert_eq!(doc.rows[2].metric, None);
}

#[test]
fn test_missing_workbook_is_an_error() {
    let result = TableReader::new("tables/NoSuchTable.xlsx").read("t");
    assert!(result.is_err());
}

#[test]
fn test_export_then_reread() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.xlsx");

    let mut doc = TableDoc::new("Baseline performance summary".to_string());
    doc.headers = vec![
        "End Use".to_string(),
        "Baseline 0° rotation".to_string(),
        "Baseline 90° rotation".to_string(),
        "Baseline 180° rotation".to_string(),
        "Baseline 270° rotation".to_string(),
        "Baseline Design Total (Average of 4 rotations)".to_string(),
    ];
    doc.rows.push(TableRow {
        label: "Interior lighting".to_string(),
        end_use: Some("Interior lighting".to_string()),
        metric: Some(Metric::Energy),
        cells: vec![
            CellValue::Text("Interior lighting".to_string()),
            CellValue::Number(100.0),
            CellValue::Number(200.0),
            CellValue::Number(300.0),
            CellValue::Number(400.0),
            CellValue::Number(250.0),
        ],
    });

    export_xlsx(&doc, &path).unwrap();

    let back = TableReader::new(&path).read("roundtrip").unwrap();
    assert_eq!(back.headers, doc.headers);
    assert_eq!(back.rows[0].cells[5], CellValue::Number(250.0));
}
