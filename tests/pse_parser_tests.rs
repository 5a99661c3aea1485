//! PS-E parser tests

use mepcalc::error::MepError;
use mepcalc::sim::{parse_pse_report, parse_pse_text};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

const BASELINE_SIM: &str = "\
 MEP BASELINE MODEL - 0 DEG                  DOE-2.2-48r   2/14/2024  10:22:01  BDL RUN  1
 REPORT- PS-E Energy End-Use Summary for EM1 (ELECTRICITY)      WEATHER FILE- CHICAGO OHARE
 ------------------------------------------------------------------------------------------

                                      KWH      MAX KW    PEAK END USE

  LIGHTS                          160038.       45.60
  TASK LIGHTS                          0.        0.00
  MISC EQUIPMT                    215400.       61.20
  SPACE HEATING                        0.        0.00
  SPACE COOLING                    85210.      120.40
  HEAT REJECT                       4215.        8.10
  PUMPS & AUX                      11025.        5.40
  VENT FANS                        52110.       14.20
  DOMEST HOT WTR                    9120.        3.10
  EXT USAGE                        21300.        6.00
                                ---------   ---------
  TOTAL                           558418.      264.00
";

#[test]
fn test_parses_all_categories() {
    let report = parse_pse_text(BASELINE_SIM).unwrap();

    assert_eq!(report.len(), 10);
    assert_eq!(report.meters, vec!["EM1".to_string()]);

    let lights = report.get("LIGHTS").unwrap();
    assert_eq!(lights.energy_kwh, 160038.0);
    assert_eq!(lights.demand_kw, 45.6);
}

#[test]
fn test_labels_with_spaces_and_ampersands() {
    let report = parse_pse_text(BASELINE_SIM).unwrap();

    assert_eq!(report.get("PUMPS & AUX").unwrap().energy_kwh, 11025.0);
    assert_eq!(report.get("DOMEST HOT WTR").unwrap().demand_kw, 3.1);
    assert_eq!(report.get("VENT FANS").unwrap().energy_kwh, 52110.0);
}

#[test]
fn test_total_row_is_not_a_category() {
    let report = parse_pse_text(BASELINE_SIM).unwrap();
    assert!(report.get("TOTAL").is_none());
}

#[test]
fn test_zero_valued_categories_are_kept() {
    let report = parse_pse_text(BASELINE_SIM).unwrap();
    let task = report.get("TASK LIGHTS").unwrap();
    assert_eq!(task.energy_kwh, 0.0);
    assert_eq!(task.demand_kw, 0.0);
}

#[test]
fn test_report_order_is_preserved() {
    let report = parse_pse_text(BASELINE_SIM).unwrap();
    assert_eq!(report.categories[0].name, "LIGHTS");
    assert_eq!(report.categories[9].name, "EXT USAGE");
}

#[test]
fn test_multiple_electric_meters_sum_energy_and_max_demand() {
    let text = "\
 REPORT- PS-E Energy End-Use Summary for EM1 (ELECTRICITY)
                                      KWH      MAX KW
  LIGHTS                          100000.       40.00
  SPACE COOLING                    50000.       90.00
  TOTAL                           150000.      130.00

 REPORT- PS-E Energy End-Use Summary for EM2 (ELECTRICITY)
                                      KWH      MAX KW
  LIGHTS                           50000.       55.00
  TOTAL                            50000.       55.00
";
    let report = parse_pse_text(text).unwrap();

    assert_eq!(report.meters, vec!["EM1".to_string(), "EM2".to_string()]);

    let lights = report.get("LIGHTS").unwrap();
    assert_eq!(lights.energy_kwh, 150000.0); // summed across meters
    assert_eq!(lights.demand_kw, 55.0); // max, not sum

    // Category present on only one meter keeps its own figures
    let cooling = report.get("SPACE COOLING").unwrap();
    assert_eq!(cooling.energy_kwh, 50000.0);
    assert_eq!(cooling.demand_kw, 90.0);
}

#[test]
fn test_fuel_meter_blocks_are_skipped() {
    let text = "\
 REPORT- PS-E Energy End-Use Summary for EM1 (ELECTRICITY)
                                      KWH      MAX KW
  LIGHTS                          100000.       40.00
  TOTAL                           100000.       40.00

 REPORT- PS-E Energy End-Use Summary for FM1 (NATURAL-GAS)
                                    THERM   MAX THERM/HR
  SPACE HEATING                     1200.        3.20
  TOTAL                             1200.        3.20
";
    let report = parse_pse_text(text).unwrap();

    assert!(report.get("LIGHTS").is_some());
    // Gas figures must not leak into the kWh totals
    assert!(report.get("SPACE HEATING").is_none());
}

#[test]
fn test_other_report_pages_are_ignored() {
    let text = "\
 REPORT- LV-D Details of Exterior Surfaces
  NORTH WALL                        120.         14.
 REPORT- PS-E Energy End-Use Summary for EM1 (ELECTRICITY)
                                      KWH      MAX KW
  LIGHTS                            5000.        2.50
  TOTAL                             5000.        2.50
";
    let report = parse_pse_text(text).unwrap();
    assert_eq!(report.len(), 1);
    assert!(report.get("NORTH WALL").is_none());
}

#[test]
fn test_thousands_separators() {
    let text = "\
 REPORT- PS-E Energy End-Use Summary for EM1 (ELECTRICITY)
                                      KWH      MAX KW
  LIGHTS                       1,234,567.       45.60
  TOTAL                        1,234,567.       45.60
";
    let report = parse_pse_text(text).unwrap();
    assert_eq!(report.get("LIGHTS").unwrap().energy_kwh, 1234567.0);
}

#[test]
fn test_missing_pse_block_is_an_error() {
    let err = parse_pse_text("nothing resembling a SIM report\n").unwrap_err();
    match err {
        MepError::Sim(msg) => assert!(msg.contains("no PS-E")),
        other => panic!("expected Sim error, got {other:?}"),
    }
}

#[test]
fn test_parse_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(BASELINE_SIM.as_bytes()).unwrap();

    let report = parse_pse_report(file.path()).unwrap();
    assert_eq!(report.get("SPACE COOLING").unwrap().demand_kw, 120.4);
}

#[test]
fn test_missing_file_error_names_the_path() {
    let err = parse_pse_report(std::path::Path::new("no/such/file.sim")).unwrap_err();
    match err {
        MepError::Sim(msg) => assert!(msg.contains("no/such/file.sim")),
        other => panic!("expected Sim error, got {other:?}"),
    }
}
