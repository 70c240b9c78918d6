use finrep_core::advisory::model::build_advisory_table;
use finrep_core::ratios::model::{compute_ratios, RatioKind};
use finrep_core::report::model::{generate_report, ReportMeta};
use finrep_core::statements::model::{build_statements, StatementInput};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// End-to-end scenarios
// ===========================================================================

fn reference_input() -> StatementInput {
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

#[test]
fn test_reference_scenario_end_to_end() {
    let output = generate_report(&reference_input(), &ReportMeta::default()).unwrap();
    let report = &output.result;

    assert_eq!(report.totals.gross_profit, dec!(400));
    assert_eq!(report.totals.operating_profit, dec!(220));
    assert_eq!(report.totals.profit_before_tax, dec!(170));
    assert_eq!(report.totals.profit_after_tax, dec!(140));
    assert_eq!(report.totals.total_assets, dec!(530));
    assert_eq!(report.totals.total_liabilities, dec!(200));
    assert_eq!(report.totals.total_equity, dec!(390));

    let current = report
        .advisories
        .iter()
        .find(|a| a.ratio == RatioKind::CurrentRatio)
        .unwrap();
    assert_eq!(current.value, Some(dec!(2.30)));
    assert_eq!(current.implication, "Excess idle resources");

    let gross = report
        .advisories
        .iter()
        .find(|a| a.ratio == RatioKind::GrossProfitMargin)
        .unwrap();
    assert_eq!(gross.value, Some(dec!(0.40)));
    assert_eq!(gross.implication, "Good profitability");
}

#[test]
fn test_all_zero_scenario_end_to_end() {
    let output = generate_report(&StatementInput::default(), &ReportMeta::default()).unwrap();
    let report = &output.result;

    assert_eq!(report.advisories.len(), 7);
    for entry in &report.advisories {
        assert_eq!(entry.value, None, "{:?}", entry.ratio);
        assert_eq!(entry.implication, "Not enough data");
        assert_eq!(entry.recommendation, "Provide missing figures");
    }
}

// ===========================================================================
// Totals are deterministic linear functions of the inputs
// ===========================================================================

#[test]
fn test_totals_are_linear_in_the_inputs() {
    let base = reference_input();
    let doubled = StatementInput {
        revenue: base.revenue * dec!(2),
        cost_of_sales: base.cost_of_sales * dec!(2),
        operating_expenses: base.operating_expenses * dec!(2),
        interest_expense: base.interest_expense * dec!(2),
        other_income: base.other_income * dec!(2),
        tax_expense: base.tax_expense * dec!(2),
        cash: base.cash * dec!(2),
        inventory: base.inventory * dec!(2),
        receivables: base.receivables * dec!(2),
        fixed_assets: base.fixed_assets * dec!(2),
        payables: base.payables * dec!(2),
        short_term_loans: base.short_term_loans * dec!(2),
        long_term_loans: base.long_term_loans * dec!(2),
        share_capital: base.share_capital * dec!(2),
        retained_earnings_prior: base.retained_earnings_prior * dec!(2),
        ..StatementInput::default()
    };

    let t1 = build_statements(&base).unwrap().totals;
    let t2 = build_statements(&doubled).unwrap().totals;

    assert_eq!(t2.profit_after_tax, t1.profit_after_tax * dec!(2));
    assert_eq!(t2.total_assets, t1.total_assets * dec!(2));
    assert_eq!(t2.total_liabilities, t1.total_liabilities * dec!(2));
    assert_eq!(t2.total_equity, t1.total_equity * dec!(2));
}

#[test]
fn test_balance_identity_holds_for_consistent_books() {
    // fixed_assets chosen so that assets = liabilities + equity exactly
    let input = StatementInput {
        fixed_assets: dec!(360),
        ..reference_input()
    };
    let output = generate_report(&input, &ReportMeta::default()).unwrap();
    let totals = &output.result.totals;

    assert_eq!(
        totals.total_assets,
        totals.total_liabilities + totals.total_equity
    );
    assert!(output.warnings.is_empty());
}

// ===========================================================================
// Zero-denominator guards
// ===========================================================================

#[test]
fn test_ratios_undefined_exactly_when_denominator_is_zero() {
    // Current liabilities zero, equity and revenue non-zero
    let input = StatementInput {
        revenue: dec!(500),
        share_capital: dec!(100),
        cash: dec!(50),
        ..StatementInput::default()
    };
    let set = build_statements(&input).unwrap();
    let ratios = compute_ratios(&input, &set.totals);

    for r in &ratios {
        match r.kind {
            RatioKind::CurrentRatio | RatioKind::QuickRatio => {
                assert_eq!(r.value, None, "{:?}", r.kind)
            }
            _ => assert!(r.value.is_some(), "{:?}", r.kind),
        }
    }
}

#[test]
fn test_negative_equity_is_defined_not_missing() {
    // Losses exceed capital: equity is negative, not zero, so the leverage
    // ratios stay defined.
    let input = StatementInput {
        revenue: dec!(100),
        cost_of_sales: dec!(300),
        share_capital: dec!(50),
        payables: dec!(10),
        ..StatementInput::default()
    };
    let set = build_statements(&input).unwrap();
    assert_eq!(set.totals.total_equity, dec!(-150));

    let ratios = compute_ratios(&input, &set.totals);
    let roe = ratios
        .iter()
        .find(|r| r.kind == RatioKind::ReturnOnEquity)
        .unwrap();
    // -200 / -150 = 1.333... -> 1.33
    assert_eq!(roe.value, Some(dec!(1.33)));
}

// ===========================================================================
// Advisory coverage
// ===========================================================================

#[test]
fn test_every_ratio_value_maps_to_exactly_one_advisory() {
    let probe_values = [
        None,
        Some(dec!(-5)),
        Some(Decimal::ZERO),
        Some(dec!(0.05)),
        Some(dec!(0.10)),
        Some(dec!(0.20)),
        Some(dec!(1)),
        Some(dec!(2)),
        Some(dec!(100)),
    ];

    for value in probe_values {
        let ratios: Vec<_> = RatioKind::ALL
            .iter()
            .map(|&kind| finrep_core::ratios::model::RatioValue { kind, value })
            .collect();
        let table = build_advisory_table(&ratios);

        assert_eq!(table.len(), 7);
        for entry in table {
            assert!(!entry.implication.is_empty());
            assert!(!entry.recommendation.is_empty());
        }
    }
}
