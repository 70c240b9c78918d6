use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates and ratios expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// A single row in a rendered statement. Section headers and separator rows
/// carry no amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
}

impl LineItem {
    /// A numeric row. Costs are passed as negative amounts by the builder.
    pub fn amount(label: &str, amount: Money) -> Self {
        LineItem {
            label: label.to_string(),
            amount: Some(amount),
        }
    }

    /// A structural section header ("Assets", "Liabilities", "Equity").
    pub fn header(label: &str) -> Self {
        LineItem {
            label: label.to_string(),
            amount: None,
        }
    }

    /// A blank separator row between sections.
    pub fn separator() -> Self {
        LineItem {
            label: String::new(),
            amount: None,
        }
    }
}

/// An ordered line-item table: one financial statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statement {
    pub title: String,
    pub rows: Vec<LineItem>,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
