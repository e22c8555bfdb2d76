use serde_json::Value;

use super::scalar_text;

/// Print just the key answer: the payment, or the failure for a rejected
/// record.
pub fn print_minimal(value: &Value) {
    for line in minimal_lines(value) {
        println!("{}", line);
    }
}

fn minimal_lines(value: &Value) -> Vec<String> {
    match value {
        Value::Array(records) => records.iter().map(record_line).collect(),
        Value::Object(map) => {
            let result = map.get("result").unwrap_or(value);
            match result.get("payment") {
                Some(payment) => vec![scalar_text(payment)],
                None => vec![serde_json::to_string(result).unwrap_or_default()],
            }
        }
        other => vec![scalar_text(other)],
    }
}

fn record_line(record: &Value) -> String {
    match record.get("payment").filter(|p| !p.is_null()) {
        Some(payment) => scalar_text(payment),
        None => format!(
            "error: {}",
            record.get("error").map(scalar_text).unwrap_or_default()
        ),
    }
}
