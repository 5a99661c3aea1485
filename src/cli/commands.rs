use crate::error::{MepError, MepResult};
use crate::excel::{export_xlsx, TableReader};
use crate::mapping::EndUseMap;
use crate::report;
use crate::sim;
use crate::template;
use crate::types::{PseReport, Rotation};
use crate::writer;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

/// Execute the tables command
pub fn tables(template_path: PathBuf, sheet: String) -> MepResult<()> {
    println!("{}", "⚡ MEP Calculator - Template tables".bold().green());
    println!("   Template: {}", template_path.display());
    println!("   Sheet: {sheet}\n");

    let index = template::scan_template(&template_path, &sheet)?;
    if index.tables.is_empty() {
        println!("{}", "No 'Table:' markers found on the sheet".yellow());
        return Ok(());
    }

    for name in &index.tables {
        println!(
            "   {} {}  ({})",
            "•".cyan(),
            name.bright_blue(),
            template::workbook_file_name(name)
        );
    }
    println!("\n{} table(s) available", index.tables.len());
    Ok(())
}

/// Execute the inspect command
pub fn inspect(file: PathBuf, json: bool) -> MepResult<()> {
    let report = sim::parse_pse_report(&file)?;

    if json {
        let encoded = serde_json::to_string_pretty(&report)
            .map_err(|e| MepError::Sim(format!("failed to encode report: {e}")))?;
        println!("{encoded}");
        return Ok(());
    }

    println!("{}", "⚡ MEP Calculator - PS-E end-use summary".bold().green());
    println!("   File: {}", file.display());
    println!("   Meter(s): {}\n", report.meters.join(", "));

    println!(
        "   {}{}{}",
        format!("{:<20}", "CATEGORY").bold(),
        format!("{:>14}", "KWH").bold(),
        format!("{:>12}", "MAX KW").bold()
    );
    for category in &report.categories {
        println!(
            "   {}{:>14}{:>12}",
            format!("{:<20}", category.name).bright_blue(),
            writer::format_number(category.energy_kwh),
            writer::format_number(category.demand_kw)
        );
    }
    Ok(())
}

/// Execute the process command
#[allow(clippy::too_many_arguments)]
pub fn process(
    sim_files: Vec<PathBuf>,
    table_names: Vec<String>,
    template_path: PathBuf,
    sheet: String,
    tables_dir: PathBuf,
    out_dir: PathBuf,
    map_file: Option<PathBuf>,
    xlsx: bool,
    verbose: bool,
) -> MepResult<()> {
    println!("{}", "⚡ MEP Calculator - Processing SIM files".bold().green());
    println!();

    if sim_files.len() != Rotation::ALL.len() {
        return Err(MepError::Validation(format!(
            "expected exactly 4 SIM files (0°, 90°, 180°, 270°), got {}",
            sim_files.len()
        )));
    }
    if table_names.is_empty() {
        return Err(MepError::Validation(
            "select at least one table to update (--table)".to_string(),
        ));
    }

    let map = match map_file {
        Some(path) => {
            if verbose {
                println!("{}", format!("📖 Loading end-use map from {}", path.display()).cyan());
            }
            EndUseMap::from_yaml_file(&path)?
        }
        None => EndUseMap::builtin(),
    };

    let index = template::scan_template(&template_path, &sheet)?;
    fs::create_dir_all(&out_dir)?;

    // Parse each SIM file once, in rotation order.
    let mut reports: Vec<(Rotation, PseReport)> = Vec::with_capacity(Rotation::ALL.len());
    for (rotation, path) in Rotation::ALL.iter().zip(&sim_files) {
        if verbose {
            println!(
                "{}",
                format!("📖 Parsing {} as {}", path.display(), rotation.column_label()).cyan()
            );
        }
        let report = sim::parse_pse_report(path)?;
        if verbose {
            println!(
                "   {} categories from meter(s) {}",
                report.len(),
                report.meters.join(", ")
            );
        }
        reports.push((*rotation, report));
    }

    for requested in &table_names {
        let name = index.resolve(requested).ok_or_else(|| {
            MepError::Validation(format!(
                "table '{}' not found in template (available: {})",
                requested,
                index.tables.join(", ")
            ))
        })?;

        let workbook_name = template::workbook_file_name(name);
        let workbook_path = tables_dir.join(&workbook_name);
        if verbose {
            println!(
                "{}",
                format!("📊 Updating '{}' from {}", name, workbook_path.display()).cyan()
            );
        }

        let mut doc = TableReader::new(&workbook_path).read(name)?;
        for (rotation, parsed) in &reports {
            let written = report::apply_rotation(&mut doc, *rotation, parsed, &map)?;
            if verbose {
                println!("   {}: {} cell(s) written", rotation.column_label(), written);
            }
        }

        let out = report::finalize(&doc)?;
        let stem = workbook_name.trim_end_matches(".xlsx").to_string();

        let csv_path = out_dir.join(format!("{stem}.csv"));
        writer::write_csv(&out, &csv_path)?;
        println!("{} {}", "✅ Wrote".green(), csv_path.display());

        if xlsx {
            let xlsx_path = out_dir.join(format!("{stem}.xlsx"));
            export_xlsx(&out, &xlsx_path)?;
            println!("{} {}", "✅ Wrote".green(), xlsx_path.display());
        }
    }

    println!();
    println!("{}", "Files processed and report tables updated".bold().green());
    Ok(())
}
