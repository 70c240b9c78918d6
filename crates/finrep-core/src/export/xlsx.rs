use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;

use crate::advisory::model::AdvisoryEntry;
use crate::error::FinRepError;
use crate::report::model::{FinancialReport, ReportMeta};
use crate::types::Statement;
use crate::FinRepResult;

/// MIME type for delivering the generated workbook.
pub const XLSX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Default download filename.
pub const DEFAULT_FILENAME: &str = "financial_statements.xlsx";

pub const SHEET_BALANCE_SHEET: &str = "Balance Sheet";
pub const SHEET_PROFIT_AND_LOSS: &str = "Profit & Loss";
pub const SHEET_CASH_FLOW: &str = "Cash Flow";
pub const SHEET_RATIOS: &str = "Financial Ratios";

/// All sheet names in workbook order.
pub const SHEET_NAMES: [&str; 4] = [
    SHEET_BALANCE_SHEET,
    SHEET_PROFIT_AND_LOSS,
    SHEET_CASH_FLOW,
    SHEET_RATIOS,
];

/// Row offset where each table begins, below the three-line header block.
const TABLE_START_ROW: u32 = 4;

impl From<XlsxError> for FinRepError {
    fn from(e: XlsxError) -> Self {
        FinRepError::ExportError(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render the report as an in-memory `.xlsx` buffer, for download-style
/// callers.
pub fn workbook_bytes(report: &FinancialReport) -> FinRepResult<Vec<u8>> {
    let mut workbook = build_workbook(report)?;
    Ok(workbook.save_to_buffer()?)
}

/// Render the report and write it to `path`.
pub fn save_workbook(report: &FinancialReport, path: impl AsRef<Path>) -> FinRepResult<()> {
    let mut workbook = build_workbook(report)?;
    workbook.save(path.as_ref())?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Workbook assembly
// ---------------------------------------------------------------------------

fn build_workbook(report: &FinancialReport) -> FinRepResult<Workbook> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let statements: [(&str, &Statement); 3] = [
        (SHEET_BALANCE_SHEET, &report.balance_sheet),
        (SHEET_PROFIT_AND_LOSS, &report.profit_and_loss),
        (SHEET_CASH_FLOW, &report.cash_flow),
    ];

    for (name, statement) in statements {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(name)?;
        write_header(worksheet, &report.meta, name, &bold)?;
        write_statement(worksheet, statement, &bold)?;
    }

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_RATIOS)?;
    write_header(worksheet, &report.meta, SHEET_RATIOS, &bold)?;
    write_advisories(worksheet, &report.advisories, &bold)?;

    Ok(workbook)
}

/// Header block at A1–A3: entity, reporting period, preparer.
fn write_header(
    worksheet: &mut Worksheet,
    meta: &ReportMeta,
    sheet_title: &str,
    bold: &Format,
) -> FinRepResult<()> {
    worksheet.write_string_with_format(
        0,
        0,
        format!("{} - {}", meta.company_name, sheet_title),
        bold,
    )?;
    worksheet.write_string(1, 0, &meta.reporting_period)?;
    worksheet.write_string(2, 0, format!("Prepared by: {}", meta.prepared_by))?;
    Ok(())
}

fn write_statement(
    worksheet: &mut Worksheet,
    statement: &Statement,
    bold: &Format,
) -> FinRepResult<()> {
    worksheet.write_string_with_format(TABLE_START_ROW, 0, "Description", bold)?;
    worksheet.write_string_with_format(TABLE_START_ROW, 1, "Amount", bold)?;

    for (i, row) in statement.rows.iter().enumerate() {
        let r = TABLE_START_ROW + 1 + i as u32;
        worksheet.write_string(r, 0, &row.label)?;
        if let Some(amount) = row.amount {
            worksheet.write_number(r, 1, amount.to_f64().unwrap_or(0.0))?;
        }
    }

    worksheet.set_column_width(0, 36)?;
    Ok(())
}

fn write_advisories(
    worksheet: &mut Worksheet,
    advisories: &[AdvisoryEntry],
    bold: &Format,
) -> FinRepResult<()> {
    for (col, title) in ["Ratio", "Value", "Implication", "Recommendation"]
        .iter()
        .enumerate()
    {
        worksheet.write_string_with_format(TABLE_START_ROW, col as u16, *title, bold)?;
    }

    for (i, entry) in advisories.iter().enumerate() {
        let r = TABLE_START_ROW + 1 + i as u32;
        worksheet.write_string(r, 0, entry.ratio.name())?;
        // Undefined ratios leave the value cell blank
        if let Some(value) = entry.value {
            worksheet.write_number(r, 1, value.to_f64().unwrap_or(0.0))?;
        }
        worksheet.write_string(r, 2, &entry.implication)?;
        worksheet.write_string(r, 3, &entry.recommendation)?;
    }

    worksheet.set_column_width(0, 20)?;
    worksheet.set_column_width(2, 48)?;
    worksheet.set_column_width(3, 48)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::model::generate_report;
    use crate::statements::model::StatementInput;
    use rust_decimal_macros::dec;

    #[test]
    fn test_workbook_bytes_are_a_zip_archive() {
        let input = StatementInput {
            revenue: dec!(1000),
            cost_of_sales: dec!(600),
            cash: dec!(100),
            payables: dec!(60),
            share_capital: dec!(200),
            ..StatementInput::default()
        };
        let output = generate_report(&input, &ReportMeta::default()).unwrap();
        let bytes = workbook_bytes(&output.result).unwrap();

        // xlsx is a ZIP container
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_workbook_builds_for_all_zero_input() {
        let output =
            generate_report(&StatementInput::default(), &ReportMeta::default()).unwrap();
        let bytes = workbook_bytes(&output.result).unwrap();
        assert!(!bytes.is_empty());
    }
}
