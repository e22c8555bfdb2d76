use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::scalar_text;

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                print_sections(map);
            }
        }
        Value::Array(arr) => print_array_table(arr),
        _ => println!("{}", scalar_text(value)),
    }
}

fn print_result_table(result: &Value, envelope: &Map<String, Value>) {
    if let Value::Object(res_map) = result {
        print_field_table(res_map);
    } else {
        println!("{}", scalar_text(result));
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                println!("  - {}", scalar_text(w));
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

/// Objects whose values are lists (e.g. the registry listing) print one
/// titled table per list; anything else prints as field/value pairs.
fn print_sections(map: &Map<String, Value>) {
    if !map.values().all(Value::is_array) {
        print_field_table(map);
        return;
    }

    for (idx, (title, section)) in map.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        println!("{}:", title);
        if let Value::Array(arr) = section {
            print_array_table(arr);
        }
    }
}

fn print_field_table(map: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.as_str(), &format_cell(val)]);
    }
    println!("{}", Table::from(builder));
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(format_cell).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        let values: Vec<String> = arr.iter().map(format_cell).collect();
        println!("{}", values.join(", "));
    }
}

fn format_cell(value: &Value) -> String {
    match value {
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_cell).collect();
            items.join(", ")
        }
        other => scalar_text(other),
    }
}
