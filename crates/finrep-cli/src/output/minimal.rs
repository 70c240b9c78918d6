use serde_json::Value;

/// Print just the headline figure from the output.
///
/// Heuristic: look inside the derived totals for well-known fields in order
/// of priority, then fall back to the first field available.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // Totals carry the headline figures for report/statements output
    let target = result_obj
        .as_object()
        .and_then(|m| m.get("totals"))
        .unwrap_or(result_obj);

    let priority_keys = [
        "profit_after_tax",
        "total_assets",
        "total_equity",
        "net_cash_movement",
        "file",
    ];

    if let Value::Object(map) = target {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(target));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
