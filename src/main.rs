use clap::{Parser, Subcommand};
use mepcalc::cli;
use mepcalc::error::MepResult;
use mepcalc::template;
use std::path::PathBuf;

const DEFAULT_TEMPLATE: &str = "database/v4_Minimum_Energy_Performance_Calculator-v06.xlsm";
const DEFAULT_TABLES_DIR: &str = "tables";

#[derive(Parser)]
#[command(name = "mepcalc")]
#[command(about = "LEED energy-performance reporting from DOE-2 SIM files")]
#[command(long_about = "MEP Calculator - LEED minimum-energy-performance reporting

Extracts PS-E end-use results from four rotation SIM files (0°, 90°, 180°,
270°) and writes them into the LEED calculator's baseline report tables,
adding the four-rotation average column used for the baseline design total.

COMMANDS:
  tables   - List the output tables a template offers
  inspect  - Show one SIM file's parsed end-use summary
  process  - Update report tables from four rotation SIM files

EXAMPLES:
  mepcalc tables
  mepcalc inspect runs/baseline_000.sim
  mepcalc process runs/r000.sim runs/r090.sim runs/r180.sim runs/r270.sim \\
      --table \"Baseline performance summary\"")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "List the output tables a template workbook offers.

The template announces each table with a cell reading 'Table: <name>' on its
outputs sheet. Listed next to every table is the per-table workbook the
process command expects under the tables directory.")]
    /// List the output tables offered by a template workbook
    Tables {
        /// Path to the template workbook (.xlsm/.xlsx)
        #[arg(default_value = DEFAULT_TEMPLATE)]
        template: PathBuf,

        /// Sheet holding the 'Table:' markers
        #[arg(long, default_value = template::DEFAULT_SHEET)]
        sheet: String,
    },

    #[command(long_about = "Show one SIM file's parsed PS-E end-use summary.

Prints every end-use category with its annual energy (kWh) and peak demand
(kW), accumulated across the file's electricity meters. Use --json for
machine-readable output.")]
    /// Show one SIM file's parsed PS-E end-use summary
    Inspect {
        /// Path to a SIM report file
        file: PathBuf,

        /// Emit the parsed summary as JSON
        #[arg(long)]
        json: bool,
    },

    #[command(long_about = "Update report tables from four rotation SIM files.

The four SIM files are taken in rotation order: 0°, 90°, 180°, 270°.
Exactly four are required, and at least one table must be selected with
--table (repeat the flag to update several). Each selected table is written
to the output directory as <TableWorkbook>.csv, plus .xlsx with --xlsx.

Values land in the table by name, not by row position: the row-label column
names the end use, the units column (kWh vs kW) picks annual energy or peak
demand, and the built-in LEED end-use map ties labels to PS-E categories.
Replace the map with --map end_use_map.yaml (a 'label: CATEGORY' mapping).

EXAMPLES:
  mepcalc process r000.sim r090.sim r180.sim r270.sim \\
      --table \"Baseline performance summary\"
  mepcalc process r000.sim r090.sim r180.sim r270.sim \\
      --table \"Baseline performance summary\" --xlsx --out-dir reports")]
    /// Update report tables from four rotation SIM files
    Process {
        /// The four rotation SIM files, in order: 0°, 90°, 180°, 270°
        #[arg(required = true)]
        sims: Vec<PathBuf>,

        /// Table to update (repeat for several); names come from 'tables'
        #[arg(short, long = "table")]
        tables: Vec<String>,

        /// Path to the template workbook
        #[arg(long, default_value = DEFAULT_TEMPLATE)]
        template: PathBuf,

        /// Sheet holding the 'Table:' markers
        #[arg(long, default_value = template::DEFAULT_SHEET)]
        sheet: String,

        /// Directory holding the per-table workbooks
        #[arg(long, default_value = DEFAULT_TABLES_DIR)]
        tables_dir: PathBuf,

        /// Directory for the output files
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Replace the built-in end-use map with a YAML mapping file
        #[arg(long)]
        map: Option<PathBuf>,

        /// Also write each updated table as .xlsx
        #[arg(long)]
        xlsx: bool,

        /// Show verbose processing steps
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> MepResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tables { template, sheet } => cli::tables(template, sheet),

        Commands::Inspect { file, json } => cli::inspect(file, json),

        Commands::Process {
            sims,
            tables,
            template,
            sheet,
            tables_dir,
            out_dir,
            map,
            xlsx,
            verbose,
        } => cli::process(
            sims, tables, template, sheet, tables_dir, out_dir, map, xlsx, verbose,
        ),
    }
}
