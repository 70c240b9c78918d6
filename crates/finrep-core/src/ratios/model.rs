use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::statements::model::{DerivedTotals, StatementInput};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The seven ratios derived from a single-period statement set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatioKind {
    #[serde(rename = "Current Ratio")]
    CurrentRatio,
    #[serde(rename = "Quick Ratio")]
    QuickRatio,
    #[serde(rename = "Debt to Equity")]
    DebtToEquity,
    #[serde(rename = "Gross Profit Margin")]
    GrossProfitMargin,
    #[serde(rename = "Operating Margin")]
    OperatingMargin,
    #[serde(rename = "Net Profit Margin")]
    NetProfitMargin,
    #[serde(rename = "Return on Equity")]
    ReturnOnEquity,
}

impl RatioKind {
    pub const ALL: [RatioKind; 7] = [
        RatioKind::CurrentRatio,
        RatioKind::QuickRatio,
        RatioKind::DebtToEquity,
        RatioKind::GrossProfitMargin,
        RatioKind::OperatingMargin,
        RatioKind::NetProfitMargin,
        RatioKind::ReturnOnEquity,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RatioKind::CurrentRatio => "Current Ratio",
            RatioKind::QuickRatio => "Quick Ratio",
            RatioKind::DebtToEquity => "Debt to Equity",
            RatioKind::GrossProfitMargin => "Gross Profit Margin",
            RatioKind::OperatingMargin => "Operating Margin",
            RatioKind::NetProfitMargin => "Net Profit Margin",
            RatioKind::ReturnOnEquity => "Return on Equity",
        }
    }
}

/// A computed ratio. `None` means the denominator was zero and the ratio is
/// undefined; consumers must treat it as "insufficient data", never as an
/// error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioValue {
    pub kind: RatioKind,
    pub value: Option<Decimal>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the seven ratios from the raw input and derived totals, each
/// rounded to 2 decimal places.
pub fn compute_ratios(input: &StatementInput, totals: &DerivedTotals) -> Vec<RatioValue> {
    let current_assets_liquid = input.cash + input.receivables;
    let current_assets = current_assets_liquid + input.inventory;
    let current_liabilities = input.payables + input.short_term_loans;
    let total_debt = input.short_term_loans + input.long_term_loans;

    RatioKind::ALL
        .iter()
        .map(|&kind| {
            let value = match kind {
                RatioKind::CurrentRatio => safe_ratio(current_assets, current_liabilities),
                RatioKind::QuickRatio => safe_ratio(current_assets_liquid, current_liabilities),
                RatioKind::DebtToEquity => safe_ratio(total_debt, totals.total_equity),
                RatioKind::GrossProfitMargin => safe_ratio(totals.gross_profit, input.revenue),
                RatioKind::OperatingMargin => safe_ratio(totals.operating_profit, input.revenue),
                RatioKind::NetProfitMargin => safe_ratio(totals.profit_after_tax, input.revenue),
                RatioKind::ReturnOnEquity => {
                    safe_ratio(totals.profit_after_tax, totals.total_equity)
                }
            };
            RatioValue { kind, value }
        })
        .collect()
}

/// Guarded division. Rounding is applied to the final quotient only,
/// half-away-from-zero at 2 decimal places.
fn safe_ratio(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator.is_zero() {
        None
    } else {
        Some(
            (numerator / denominator)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statements::model::derive_totals;
    use rust_decimal_macros::dec;

    fn sample_input() -> StatementInput {
        StatementInput {
            revenue: dec!(1000),
            cost_of_sales: dec!(600),
            operating_expenses: dec!(200),
            interest_expense: dec!(50),
            other_income: dec!(20),
            tax_expense: dec!(30),
            cash: dec!(100),
            inventory: dec!(50),
            receivables: dec!(80),
            fixed_assets: dec!(300),
            payables: dec!(60),
            short_term_loans: dec!(40),
            long_term_loans: dec!(100),
            share_capital: dec!(200),
            retained_earnings_prior: dec!(50),
            ..StatementInput::default()
        }
    }

    fn ratio(ratios: &[RatioValue], kind: RatioKind) -> Option<Decimal> {
        ratios.iter().find(|r| r.kind == kind).unwrap().value
    }

    #[test]
    fn test_reference_scenario_ratios() {
        let input = sample_input();
        let totals = derive_totals(&input);
        let ratios = compute_ratios(&input, &totals);

        assert_eq!(ratios.len(), 7);
        // (100 + 80 + 50) / (60 + 40) = 2.30
        assert_eq!(ratio(&ratios, RatioKind::CurrentRatio), Some(dec!(2.30)));
        // (100 + 80) / 100 = 1.80
        assert_eq!(ratio(&ratios, RatioKind::QuickRatio), Some(dec!(1.80)));
        // (40 + 100) / 390 = 0.3589... -> 0.36
        assert_eq!(ratio(&ratios, RatioKind::DebtToEquity), Some(dec!(0.36)));
        // 400 / 1000
        assert_eq!(
            ratio(&ratios, RatioKind::GrossProfitMargin),
            Some(dec!(0.40))
        );
        // 220 / 1000
        assert_eq!(ratio(&ratios, RatioKind::OperatingMargin), Some(dec!(0.22)));
        // 140 / 1000
        assert_eq!(ratio(&ratios, RatioKind::NetProfitMargin), Some(dec!(0.14)));
        // 140 / 390 = 0.3589... -> 0.36
        assert_eq!(ratio(&ratios, RatioKind::ReturnOnEquity), Some(dec!(0.36)));
    }

    #[test]
    fn test_zero_current_liabilities_undefines_liquidity_ratios() {
        let input = StatementInput {
            cash: dec!(100),
            receivables: dec!(50),
            revenue: dec!(10),
            share_capital: dec!(10),
            ..StatementInput::default()
        };
        let totals = derive_totals(&input);
        let ratios = compute_ratios(&input, &totals);

        assert_eq!(ratio(&ratios, RatioKind::CurrentRatio), None);
        assert_eq!(ratio(&ratios, RatioKind::QuickRatio), None);
        // Other denominators are non-zero here
        assert!(ratio(&ratios, RatioKind::DebtToEquity).is_some());
        assert!(ratio(&ratios, RatioKind::GrossProfitMargin).is_some());
    }

    #[test]
    fn test_zero_revenue_undefines_margins() {
        let input = StatementInput {
            payables: dec!(10),
            share_capital: dec!(10),
            ..StatementInput::default()
        };
        let totals = derive_totals(&input);
        let ratios = compute_ratios(&input, &totals);

        assert_eq!(ratio(&ratios, RatioKind::GrossProfitMargin), None);
        assert_eq!(ratio(&ratios, RatioKind::OperatingMargin), None);
        assert_eq!(ratio(&ratios, RatioKind::NetProfitMargin), None);
        assert!(ratio(&ratios, RatioKind::CurrentRatio).is_some());
    }

    #[test]
    fn test_zero_equity_undefines_leverage_and_roe() {
        // share_capital + retained_earnings_prior + profit_after_tax == 0
        let input = StatementInput {
            revenue: dec!(100),
            cost_of_sales: dec!(100),
            payables: dec!(10),
            ..StatementInput::default()
        };
        let totals = derive_totals(&input);
        assert_eq!(totals.total_equity, Decimal::ZERO);

        let ratios = compute_ratios(&input, &totals);
        assert_eq!(ratio(&ratios, RatioKind::DebtToEquity), None);
        assert_eq!(ratio(&ratios, RatioKind::ReturnOnEquity), None);
    }

    #[test]
    fn test_all_zero_input_undefines_every_ratio() {
        let input = StatementInput::default();
        let totals = derive_totals(&input);
        let ratios = compute_ratios(&input, &totals);

        assert_eq!(ratios.len(), 7);
        assert!(ratios.iter().all(|r| r.value.is_none()));
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        // 929 / 200 = 4.645 -> 4.65 (a half-even policy would give 4.64)
        let input = StatementInput {
            cash: dec!(929),
            payables: dec!(200),
            ..StatementInput::default()
        };
        let totals = derive_totals(&input);
        let ratios = compute_ratios(&input, &totals);

        assert_eq!(ratio(&ratios, RatioKind::CurrentRatio), Some(dec!(4.65)));
        assert_eq!(ratio(&ratios, RatioKind::QuickRatio), Some(dec!(4.65)));
    }

    #[test]
    fn test_rounding_applies_to_final_quotient() {
        // 7 / 3 = 2.333... -> 2.33
        let input = StatementInput {
            cash: dec!(7),
            payables: dec!(3),
            ..StatementInput::default()
        };
        let totals = derive_totals(&input);
        let ratios = compute_ratios(&input, &totals);
        assert_eq!(ratio(&ratios, RatioKind::CurrentRatio), Some(dec!(2.33)));
    }
}
