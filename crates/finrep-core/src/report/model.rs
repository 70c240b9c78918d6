use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::advisory::model::{build_advisory_table, AdvisoryEntry};
use crate::ratios::model::{compute_ratios, RatioValue};
use crate::statements::model::{build_statements, DerivedTotals, StatementInput};
use crate::types::{with_metadata, ComputationOutput, Statement};
use crate::FinRepResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Report header block: entity, period, preparer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportMeta {
    pub company_name: String,
    pub reporting_period: String,
    pub prepared_by: String,
}

impl Default for ReportMeta {
    fn default() -> Self {
        ReportMeta {
            company_name: "Your Company Ltd.".to_string(),
            reporting_period: "For the year ended 31st December 2024".to_string(),
            prepared_by: "Finance Team".to_string(),
        }
    }
}

/// Complete single-period report: the three statements, the ratio set, and
/// the advisory table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialReport {
    pub meta: ReportMeta,
    pub profit_and_loss: Statement,
    pub balance_sheet: Statement,
    pub cash_flow: Statement,
    pub totals: DerivedTotals,
    pub ratios: Vec<RatioValue>,
    pub advisories: Vec<AdvisoryEntry>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run the full derivation pipeline: statements, then ratios, then the
/// advisory table. One linear pass, no I/O.
pub fn generate_report(
    input: &StatementInput,
    meta: &ReportMeta,
) -> FinRepResult<ComputationOutput<FinancialReport>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let statements = build_statements(input)?;
    let ratios = compute_ratios(input, &statements.totals);
    let advisories = build_advisory_table(&ratios);

    // The balance identity is reported, never enforced.
    let gap = statements.totals.total_assets
        - (statements.totals.total_liabilities + statements.totals.total_equity);
    if !gap.is_zero() {
        warnings.push(format!(
            "Balance sheet identity does not hold: total assets differ from \
             total liabilities plus total equity by {gap}"
        ));
    }

    let report = FinancialReport {
        meta: meta.clone(),
        profit_and_loss: statements.profit_and_loss,
        balance_sheet: statements.balance_sheet,
        cash_flow: statements.cash_flow,
        totals: statements.totals,
        ratios,
        advisories,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Single-Period Financial Statements with Ratio Analysis",
        input,
        warnings,
        elapsed,
        report,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
