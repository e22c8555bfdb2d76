use serde_json::Value;

use super::{scalar_text, table};

/// Printed before the first record and after every record.
const SEPARATOR: &str = "**************************************************";

/// Print the human-readable form of a command result.
pub fn print_text(value: &Value) {
    match render_text(value) {
        Some(text) => print!("{}", text),
        None => table::print_table(value),
    }
}

/// Human-readable rendering, or None when the value has no text form.
pub fn render_text(value: &Value) -> Option<String> {
    match value {
        Value::Array(records) => Some(render_records(records)),
        Value::String(s) => Some(format!("{}\n", s)),
        Value::Object(map) => map
            .get("result")
            .and_then(|r| r.get("description"))
            .map(|d| format!("{}\n", scalar_text(d))),
        _ => None,
    }
}

/// Record-by-record report: each rendering or failure framed by separators.
fn render_records(records: &[Value]) -> String {
    let mut out = String::new();
    out.push_str(SEPARATOR);
    out.push('\n');

    for record in records {
        let data = record.get("data").map(scalar_text).unwrap_or_default();
        match record.get("description").filter(|d| !d.is_null()) {
            Some(description) => out.push_str(&scalar_text(description)),
            None => {
                let error = record.get("error").map(scalar_text).unwrap_or_default();
                out.push_str(&format!("Data: {} caused Exception: {}", data, error));
            }
        }
        out.push('\n');
        out.push_str(SEPARATOR);
        out.push('\n');
    }

    out
}
