use serde_json::Value;
use std::io;

/// Write output as CSV to stdout.
///
/// Statement rows become label,amount records and the advisory table becomes
/// a four-column block; a generic field,value layout covers everything else.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let root = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let Some(map) = root.as_object() else {
        let _ = wtr.write_record([&format_csv_value(root)]);
        let _ = wtr.flush();
        return;
    };

    let mut handled = false;

    for key in ["profit_and_loss", "balance_sheet", "cash_flow"] {
        if let Some(statement) = map.get(key) {
            write_statement_csv(&mut wtr, statement);
            handled = true;
        }
    }

    if let Some(Value::Array(advisories)) = map.get("advisories") {
        write_advisories_csv(&mut wtr, advisories);
        handled = true;
    }

    if !handled {
        let _ = wtr.write_record(["field", "value"]);
        for (key, val) in map {
            let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
        }
    }

    let _ = wtr.flush();
}

fn write_statement_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, statement: &Value) {
    let Some(map) = statement.as_object() else {
        return;
    };

    let title = map.get("title").and_then(Value::as_str).unwrap_or_default();
    let _ = wtr.write_record([title, "amount"]);

    if let Some(Value::Array(rows)) = map.get("rows") {
        for row in rows {
            if let Value::Object(item) = row {
                let label = item
                    .get("label")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                let amount = item
                    .get("amount")
                    .map(format_csv_value)
                    .unwrap_or_default();
                let _ = wtr.write_record([label, &amount]);
            }
        }
    }
}

fn write_advisories_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, advisories: &[Value]) {
    let _ = wtr.write_record(["ratio", "value", "implication", "recommendation"]);
    for entry in advisories {
        if let Value::Object(map) = entry {
            let _ = wtr.write_record([
                map.get("ratio").map(format_csv_value).unwrap_or_default(),
                map.get("value").map(format_csv_value).unwrap_or_default(),
                map.get("implication")
                    .map(format_csv_value)
                    .unwrap_or_default(),
                map.get("recommendation")
                    .map(format_csv_value)
                    .unwrap_or_default(),
            ]);
        }
    }
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
