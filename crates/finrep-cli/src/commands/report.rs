use clap::Args;
use serde_json::{json, Value};

use finrep_core::advisory::model::build_advisory_table;
use finrep_core::export::xlsx;
use finrep_core::ratios::model::compute_ratios;
use finrep_core::report::model::{generate_report, ReportMeta};
use finrep_core::statements::model::{build_statements, StatementInput};

use crate::input;

/// Header block overrides shared by the report-producing commands.
#[derive(Args)]
pub struct MetaArgs {
    /// Company name for the report header
    #[arg(long)]
    pub company: Option<String>,

    /// Reporting period label, e.g. "For the year ended 31st December 2024"
    #[arg(long)]
    pub period: Option<String>,

    /// Preparer named in the report header
    #[arg(long = "prepared-by")]
    pub prepared_by: Option<String>,
}

impl MetaArgs {
    fn to_meta(&self) -> ReportMeta {
        let mut meta = ReportMeta::default();
        if let Some(ref company) = self.company {
            meta.company_name = company.clone();
        }
        if let Some(ref period) = self.period {
            meta.reporting_period = period.clone();
        }
        if let Some(ref prepared_by) = self.prepared_by {
            meta.prepared_by = prepared_by.clone();
        }
        meta
    }
}

/// Arguments for full report generation
#[derive(Args)]
pub struct ReportArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub meta: MetaArgs,
}

/// Arguments for statement generation
#[derive(Args)]
pub struct StatementsArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for ratio analysis
#[derive(Args)]
pub struct RatiosArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for spreadsheet export
#[derive(Args)]
pub struct ExportArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,

    /// Output path for the workbook
    #[arg(long, default_value = "financial_statements.xlsx")]
    pub out: String,

    #[command(flatten)]
    pub meta: MetaArgs,
}

fn read_input(path: &Option<String>) -> Result<StatementInput, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        input::file::read_json(path)
    } else if let Some(data) = input::stdin::read_stdin()? {
        Ok(serde_json::from_value(data)?)
    } else {
        Err("--input <file.json> or stdin required".into())
    }
}

pub fn run_report(args: ReportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fin_input = read_input(&args.input)?;
    let result = generate_report(&fin_input, &args.meta.to_meta())?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_statements(args: StatementsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fin_input = read_input(&args.input)?;
    let result = build_statements(&fin_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_ratios(args: RatiosArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fin_input = read_input(&args.input)?;
    let set = build_statements(&fin_input)?;
    let ratios = compute_ratios(&fin_input, &set.totals);
    let advisories = build_advisory_table(&ratios);
    Ok(json!({
        "ratios": ratios,
        "advisories": advisories,
    }))
}

pub fn run_export(args: ExportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fin_input = read_input(&args.input)?;
    let result = generate_report(&fin_input, &args.meta.to_meta())?;
    let bytes = xlsx::workbook_bytes(&result.result)?;
    std::fs::write(&args.out, &bytes)?;

    Ok(json!({
        "file": args.out,
        "bytes": bytes.len(),
        "sheets": xlsx::SHEET_NAMES,
        "mime": xlsx::XLSX_MIME,
        "warnings": result.warnings,
    }))
}
