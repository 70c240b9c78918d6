use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::ratios::model::{RatioKind, RatioValue};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Implication/recommendation pair attached to a ratio value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryEntry {
    pub ratio: RatioKind,
    pub value: Option<Decimal>,
    pub implication: String,
    pub recommendation: String,
}

/// One threshold rule. Rules are evaluated in order, first match wins; every
/// rule set ends with a catch-all.
struct Rule {
    matches: fn(Decimal) -> bool,
    implication: &'static str,
    recommendation: &'static str,
}

/// Uniform entry for undefined ratios, overriding the ratio-specific rules.
const NO_DATA_IMPLICATION: &str = "Not enough data";
const NO_DATA_RECOMMENDATION: &str = "Provide missing figures";

// ---------------------------------------------------------------------------
// Rule sets
// ---------------------------------------------------------------------------

fn below_one(v: Decimal) -> bool {
    v < Decimal::ONE
}

fn above_two(v: Decimal) -> bool {
    v > dec!(2)
}

fn below_20_pct(v: Decimal) -> bool {
    v < dec!(0.20)
}

fn below_10_pct(v: Decimal) -> bool {
    v < dec!(0.10)
}

fn below_5_pct(v: Decimal) -> bool {
    v < dec!(0.05)
}

fn any(_v: Decimal) -> bool {
    true
}

const CURRENT_RATIO_RULES: [Rule; 3] = [
    Rule {
        matches: below_one,
        implication: "Liquidity risk; may struggle to meet short-term obligations",
        recommendation: "Improve working capital position",
    },
    Rule {
        matches: above_two,
        implication: "Excess idle resources",
        recommendation: "Invest excess liquidity or reduce liabilities",
    },
    Rule {
        matches: any,
        implication: "Healthy liquidity position",
        recommendation: "Maintain balance",
    },
];

const QUICK_RATIO_RULES: [Rule; 2] = [
    Rule {
        matches: below_one,
        implication: "Weak liquidity",
        recommendation: "Boost liquid assets or reduce current liabilities",
    },
    Rule {
        matches: any,
        implication: "Good liquidity buffer",
        recommendation: "Maintain current level",
    },
];

const DEBT_TO_EQUITY_RULES: [Rule; 2] = [
    Rule {
        matches: above_two,
        implication: "High financial risk due to excessive leverage",
        recommendation: "Reduce debt or increase equity",
    },
    Rule {
        matches: any,
        implication: "Acceptable leverage level",
        recommendation: "Maintain or optimize capital structure",
    },
];

const GROSS_MARGIN_RULES: [Rule; 2] = [
    Rule {
        matches: below_20_pct,
        implication: "Low profitability on sales",
        recommendation: "Reduce cost of sales or increase selling prices",
    },
    Rule {
        matches: any,
        implication: "Good profitability",
        recommendation: "Maintain margin levels",
    },
];

const OPERATING_MARGIN_RULES: [Rule; 2] = [
    Rule {
        matches: below_10_pct,
        implication: "Operational inefficiencies",
        recommendation: "Control operating expenses",
    },
    Rule {
        matches: any,
        implication: "Efficient operations",
        recommendation: "Maintain cost control",
    },
];

const NET_MARGIN_RULES: [Rule; 2] = [
    Rule {
        matches: below_5_pct,
        implication: "Low profitability",
        recommendation: "Increase revenue or reduce total expenses",
    },
    Rule {
        matches: any,
        implication: "Healthy bottom-line profitability",
        recommendation: "Sustain performance",
    },
];

const ROE_RULES: [Rule; 2] = [
    Rule {
        matches: below_10_pct,
        implication: "Low return for shareholders",
        recommendation: "Improve profitability or optimize equity",
    },
    Rule {
        matches: any,
        implication: "Good return for shareholders",
        recommendation: "Maintain or enhance ROE",
    },
];

fn rule_set(kind: RatioKind) -> &'static [Rule] {
    match kind {
        RatioKind::CurrentRatio => &CURRENT_RATIO_RULES,
        RatioKind::QuickRatio => &QUICK_RATIO_RULES,
        RatioKind::DebtToEquity => &DEBT_TO_EQUITY_RULES,
        RatioKind::GrossProfitMargin => &GROSS_MARGIN_RULES,
        RatioKind::OperatingMargin => &OPERATING_MARGIN_RULES,
        RatioKind::NetProfitMargin => &NET_MARGIN_RULES,
        RatioKind::ReturnOnEquity => &ROE_RULES,
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Map one ratio value to its advisory entry. Total over the input domain:
/// undefined values get the uniform no-data entry, and every rule set ends
/// with a catch-all.
pub fn advise(ratio: &RatioValue) -> AdvisoryEntry {
    let (implication, recommendation) = match ratio.value {
        None => (NO_DATA_IMPLICATION, NO_DATA_RECOMMENDATION),
        Some(value) => rule_set(ratio.kind)
            .iter()
            .find(|rule| (rule.matches)(value))
            .map(|rule| (rule.implication, rule.recommendation))
            .unwrap_or((NO_DATA_IMPLICATION, NO_DATA_RECOMMENDATION)),
    };

    AdvisoryEntry {
        ratio: ratio.kind,
        value: ratio.value,
        implication: implication.to_string(),
        recommendation: recommendation.to_string(),
    }
}

/// Build the full advisory table, one entry per ratio.
pub fn build_advisory_table(ratios: &[RatioValue]) -> Vec<AdvisoryEntry> {
    ratios.iter().map(advise).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
