//! CRC Equation Generator - Command Line Interface
//!
//! Reads an influence matrix from a spreadsheet and prints one XOR equation per
//! output bit.

use clap::Parser;
use crc_equations::{EmitOptions, EquationWriter, InfluenceMatrix, Layout, Workbook};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "crc-equations")]
#[command(about = "Generate XOR equations from a spreadsheet influence matrix", long_about = None)]
#[command(version)]
struct Args {
    /// Input workbook (xlsx, xlsm, xlsb, xls or ods)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Sheet holding the matrix
    #[arg(short = 'S', long = "sheet", default_value = "Sheet1")]
    sheet: String,

    /// Row of the output signal names (1-based)
    #[arg(long, default_value_t = Layout::default().header_row)]
    header_row: u32,

    /// Column of the input signal names (1-based, A = 1)
    #[arg(long, default_value_t = Layout::default().label_column)]
    label_column: u32,

    /// First row of matrix data (1-based)
    #[arg(long, default_value_t = Layout::default().data_start_row)]
    data_start_row: u32,

    /// First column of matrix data (1-based, A = 1)
    #[arg(long, default_value_t = Layout::default().data_start_col)]
    data_start_col: u32,

    /// Omit the comment banner
    #[arg(long = "no-banner")]
    no_banner: bool,

    /// Print matrix statistics to stderr
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// List the workbook's sheets and exit
    #[arg(long = "list-sheets")]
    list_sheets: bool,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if args.list_sheets {
        match Workbook::open(&args.input) {
            Ok(workbook) => {
                for name in workbook.sheet_names() {
                    println!("{}", name);
                }
                return;
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }

    let layout = Layout {
        header_row: args.header_row,
        label_column: args.label_column,
        data_start_row: args.data_start_row,
        data_start_col: args.data_start_col,
    };

    let matrix = match InfluenceMatrix::from_workbook(&args.input, &args.sheet, &layout) {
        Ok(matrix) => matrix,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if args.summary {
        let stats = matrix.stats();
        eprintln!("Matrix statistics:");
        eprintln!("  Inputs (rows):       {}", stats.num_rows);
        eprintln!("  Outputs (columns):   {}", stats.num_columns);
        eprintln!("  Contributions:       {}", stats.num_contributions);
        eprintln!("  Zero equations:      {}", stats.num_zero_equations);
        eprintln!("  Max fan-in:          {}", stats.max_fan_in);
        eprintln!();
    }

    let options = EmitOptions {
        banner: !args.no_banner,
    };

    let result = match args.output_file {
        Some(ref path) => matrix.to_equations_file(path, &options).map(|_| {
            if args.summary {
                eprintln!("Wrote output to: {}", path.display());
            }
        }),
        None => matrix.write_to_stdout(&options),
    };

    if let Err(e) = result {
        eprintln!("Error writing equations: {}", e);
        process::exit(1);
    }
}
