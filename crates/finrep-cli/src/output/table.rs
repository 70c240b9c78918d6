use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as tables using the tabled crate.
///
/// Statement objects ({title, rows}) render as Description/Amount tables,
/// advisory arrays as a four-column ratio table, anything else as a generic
/// Field/Value table.
pub fn print_table(value: &Value) {
    // Unwrap the computation envelope if present
    let root = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let Some(map) = root.as_object() else {
        println!("{}", root);
        return;
    };

    let mut printed = false;

    for key in ["profit_and_loss", "balance_sheet", "cash_flow"] {
        if let Some(statement) = map.get(key) {
            print_statement(statement);
            printed = true;
        }
    }

    if let Some(Value::Array(advisories)) = map.get("advisories") {
        print_advisories(advisories);
        printed = true;
    }

    if let Some(totals) = map.get("totals") {
        print_flat("Totals", totals);
        printed = true;
    }

    if !printed {
        print_flat("Result", root);
    }

    // Warnings ride on the envelope, not the result
    if let Some(Value::Array(warnings)) = value.as_object().and_then(|m| m.get("warnings")) {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }
}

fn print_statement(statement: &Value) {
    let Some(map) = statement.as_object() else {
        return;
    };
    if let Some(Value::String(title)) = map.get("title") {
        println!("{}", title);
    }

    let mut builder = Builder::default();
    builder.push_record(["Description", "Amount"]);
    if let Some(Value::Array(rows)) = map.get("rows") {
        for row in rows {
            if let Value::Object(item) = row {
                let label = item
                    .get("label")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                let amount = item.get("amount").map(format_value).unwrap_or_default();
                builder.push_record([label, &amount]);
            }
        }
    }
    println!("{}\n", Table::from(builder));
}

fn print_advisories(advisories: &[Value]) {
    println!("Financial Ratios");

    let mut builder = Builder::default();
    builder.push_record(["Ratio", "Value", "Implication", "Recommendation"]);
    for entry in advisories {
        if let Value::Object(map) = entry {
            builder.push_record([
                map.get("ratio").map(format_value).unwrap_or_default(),
                map.get("value").map(format_value).unwrap_or_default(),
                map.get("implication").map(format_value).unwrap_or_default(),
                map.get("recommendation").map(format_value).unwrap_or_default(),
            ]);
        }
    }
    println!("{}\n", Table::from(builder));
}

fn print_flat(heading: &str, value: &Value) {
    let Some(map) = value.as_object() else {
        println!("{}", value);
        return;
    };

    println!("{}", heading);
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.as_str(), &format_value(val)]);
    }
    println!("{}\n", Table::from(builder));
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        // Undefined ratios serialize as null
        Value::Null => "n/a".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
