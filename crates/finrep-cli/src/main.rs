mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::report::{ExportArgs, RatiosArgs, ReportArgs, StatementsArgs};

/// Single-period financial statement generation and ratio analysis
#[derive(Parser)]
#[command(
    name = "finrep",
    version,
    about = "Single-period financial statement generation and ratio analysis",
    long_about = "Derives Profit & Loss, Balance Sheet and Cash Flow statements plus \
                  seven financial ratios with threshold-driven advisory text from a flat \
                  set of figures, and exports them as a multi-sheet spreadsheet."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the full report: statements, ratios and advisories
    Report(ReportArgs),
    /// Build the three financial statements only
    Statements(StatementsArgs),
    /// Compute the seven financial ratios with advisory text
    Ratios(RatiosArgs),
    /// Export the report as a multi-sheet .xlsx workbook
    Export(ExportArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Report(args) => commands::report::run_report(args),
        Commands::Statements(args) => commands::report::run_statements(args),
        Commands::Ratios(args) => commands::report::run_ratios(args),
        Commands::Export(args) => commands::report::run_export(args),
        Commands::Version => {
            println!("finrep {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
