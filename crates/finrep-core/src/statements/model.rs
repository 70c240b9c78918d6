use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FinRepError;
use crate::types::{LineItem, Money, Statement};
use crate::FinRepResult;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// The full set of raw figures for a single reporting period. Constructed
/// once per report generation, immutable afterward.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementInput {
    // Profit & loss items
    /// Revenue (sales)
    pub revenue: Money,
    /// Cost of sales
    pub cost_of_sales: Money,
    /// Operating expenses
    pub operating_expenses: Money,
    /// Interest expense
    pub interest_expense: Money,
    /// Other income
    pub other_income: Money,
    /// Tax expense
    pub tax_expense: Money,

    // Balance sheet items
    /// Cash and cash equivalents
    pub cash: Money,
    /// Inventory
    pub inventory: Money,
    /// Trade receivables
    pub receivables: Money,
    /// Fixed assets (net)
    pub fixed_assets: Money,
    /// Trade payables
    pub payables: Money,
    /// Short-term loans
    pub short_term_loans: Money,
    /// Long-term loans
    pub long_term_loans: Money,
    /// Share capital
    pub share_capital: Money,
    /// Retained earnings from previous years
    pub retained_earnings_prior: Money,

    // Cash flow activity figures. These three may be negative.
    /// Net cash from operating activities
    pub cash_from_operations: Money,
    /// Net cash from investing activities
    pub cash_from_investing: Money,
    /// Net cash from financing activities
    pub cash_from_financing: Money,
}

// ---------------------------------------------------------------------------
// Output structs
// ---------------------------------------------------------------------------

/// Subtotals and totals derived from the raw input. Linear arithmetic only;
/// no division happens in this module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedTotals {
    pub gross_profit: Money,
    pub operating_profit: Money,
    pub profit_before_tax: Money,
    pub profit_after_tax: Money,
    pub total_assets: Money,
    pub total_liabilities: Money,
    pub total_equity: Money,
    pub net_cash_movement: Money,
    pub closing_cash: Money,
}

/// The three rendered statements plus the totals they were built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementSet {
    pub profit_and_loss: Statement,
    pub balance_sheet: Statement,
    pub cash_flow: Statement,
    pub totals: DerivedTotals,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Validate the input and render the three financial statements.
pub fn build_statements(input: &StatementInput) -> FinRepResult<StatementSet> {
    validate_input(input)?;

    let totals = derive_totals(input);

    Ok(StatementSet {
        profit_and_loss: build_profit_and_loss(input, &totals),
        balance_sheet: build_balance_sheet(input, &totals),
        cash_flow: build_cash_flow(input, &totals),
        totals,
    })
}

/// Compute all subtotals and totals from the raw figures.
///
/// Current-year profit flows into equity as retained earnings. Closing cash
/// is reported equal to the supplied cash balance; no opening-balance
/// reconciliation is performed.
pub fn derive_totals(input: &StatementInput) -> DerivedTotals {
    let gross_profit = input.revenue - input.cost_of_sales;
    let operating_profit = gross_profit - input.operating_expenses + input.other_income;
    let profit_before_tax = operating_profit - input.interest_expense;
    let profit_after_tax = profit_before_tax - input.tax_expense;

    let total_assets = input.cash + input.inventory + input.receivables + input.fixed_assets;
    let total_liabilities = input.payables + input.short_term_loans + input.long_term_loans;
    let total_equity = input.share_capital + input.retained_earnings_prior + profit_after_tax;

    let net_cash_movement =
        input.cash_from_operations + input.cash_from_investing + input.cash_from_financing;

    DerivedTotals {
        gross_profit,
        operating_profit,
        profit_before_tax,
        profit_after_tax,
        total_assets,
        total_liabilities,
        total_equity,
        net_cash_movement,
        closing_cash: input.cash,
    }
}

// ---------------------------------------------------------------------------
// Statement rendering
// ---------------------------------------------------------------------------

fn build_profit_and_loss(input: &StatementInput, totals: &DerivedTotals) -> Statement {
    Statement {
        title: "Profit & Loss".to_string(),
        rows: vec![
            LineItem::amount("Revenue", input.revenue),
            LineItem::amount("Cost of Sales", -input.cost_of_sales),
            LineItem::amount("Gross Profit", totals.gross_profit),
            LineItem::amount("Operating Expenses", -input.operating_expenses),
            LineItem::amount("Other Income", input.other_income),
            LineItem::amount("Operating Profit", totals.operating_profit),
            LineItem::amount("Interest Expense", -input.interest_expense),
            LineItem::amount("Profit Before Tax", totals.profit_before_tax),
            LineItem::amount("Tax Expense", -input.tax_expense),
            LineItem::amount("Profit After Tax", totals.profit_after_tax),
        ],
    }
}

fn build_balance_sheet(input: &StatementInput, totals: &DerivedTotals) -> Statement {
    Statement {
        title: "Balance Sheet".to_string(),
        rows: vec![
            LineItem::header("Assets"),
            LineItem::amount("Cash and Cash Equivalents", input.cash),
            LineItem::amount("Inventory", input.inventory),
            LineItem::amount("Trade Receivables", input.receivables),
            LineItem::amount("Fixed Assets", input.fixed_assets),
            LineItem::amount("Total Assets", totals.total_assets),
            LineItem::separator(),
            LineItem::header("Liabilities"),
            LineItem::amount("Trade Payables", input.payables),
            LineItem::amount("Short-term Loans", input.short_term_loans),
            LineItem::amount("Long-term Loans", input.long_term_loans),
            LineItem::amount("Total Liabilities", totals.total_liabilities),
            LineItem::separator(),
            LineItem::header("Equity"),
            LineItem::amount("Share Capital", input.share_capital),
            LineItem::amount(
                "Retained Earnings (Previous Years)",
                input.retained_earnings_prior,
            ),
            LineItem::amount("Retained Earnings (Current Year)", totals.profit_after_tax),
            LineItem::amount("Total Equity", totals.total_equity),
        ],
    }
}

fn build_cash_flow(input: &StatementInput, totals: &DerivedTotals) -> Statement {
    Statement {
        title: "Cash Flow".to_string(),
        rows: vec![
            LineItem::amount(
                "Net Cash from Operating Activities",
                input.cash_from_operations,
            ),
            LineItem::amount(
                "Net Cash from Investing Activities",
                input.cash_from_investing,
            ),
            LineItem::amount(
                "Net Cash from Financing Activities",
                input.cash_from_financing,
            ),
            LineItem::amount("Net Increase in Cash", totals.net_cash_movement),
            LineItem::amount("Closing Cash Balance", totals.closing_cash),
        ],
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_input(input: &StatementInput) -> FinRepResult<()> {
    validate_non_negative("revenue", input.revenue)?;
    validate_non_negative("cost_of_sales", input.cost_of_sales)?;
    validate_non_negative("operating_expenses", input.operating_expenses)?;
    validate_non_negative("interest_expense", input.interest_expense)?;
    validate_non_negative("other_income", input.other_income)?;
    validate_non_negative("tax_expense", input.tax_expense)?;
    validate_non_negative("cash", input.cash)?;
    validate_non_negative("inventory", input.inventory)?;
    validate_non_negative("receivables", input.receivables)?;
    validate_non_negative("fixed_assets", input.fixed_assets)?;
    validate_non_negative("payables", input.payables)?;
    validate_non_negative("short_term_loans", input.short_term_loans)?;
    validate_non_negative("long_term_loans", input.long_term_loans)?;
    validate_non_negative("share_capital", input.share_capital)?;
    validate_non_negative("retained_earnings_prior", input.retained_earnings_prior)?;
    // The three cash flow activity figures are deliberately exempt.
    Ok(())
}

fn validate_non_negative(field: &str, value: Money) -> FinRepResult<()> {
    if value < Decimal::ZERO {
        return Err(FinRepError::InvalidInput {
            field: field.into(),
            reason: format!("Value must be non-negative, got {value}"),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
