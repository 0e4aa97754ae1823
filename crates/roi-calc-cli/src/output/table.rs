use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{flatten, scalar_text};

/// Format output as tables using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                print_object(map);
            }
        }
        Value::Array(arr) => print_array_table(arr),
        _ => println!("{}", value),
    }
}

fn print_result_table(result: &Value, envelope: &Map<String, Value>) {
    println!("{}", field_table(result));

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

/// Scalar and nested fields go into one Field/Value table; arrays of
/// objects get a table of their own with one row per element.
fn print_object(map: &Map<String, Value>) {
    let (lists, fields): (Vec<_>, Vec<_>) = map
        .iter()
        .partition(|(_, v)| is_object_list(v));

    if !fields.is_empty() {
        let rest: Map<String, Value> = fields
            .into_iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        println!("{}", field_table(&Value::Object(rest)));
    }

    for (key, list) in lists {
        if let Value::Array(arr) = list {
            println!("\n{}:", key);
            print_array_table(arr);
        }
    }
}

fn is_object_list(value: &Value) -> bool {
    matches!(value, Value::Array(arr) if arr.first().is_some_and(Value::is_object))
}

fn field_table(value: &Value) -> Table {
    let mut flat = Vec::new();
    flatten(value, "", &mut flat);

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in flat {
        builder.push_record([key, scalar_text(val, "N/A")]);
    }
    Table::from(builder)
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
                    .map(|h| {
                        map.get(h.as_str())
                            .map(|v| scalar_text(v, "N/A"))
                            .unwrap_or_default()
                    })
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", scalar_text(item, "N/A"));
        }
    }
}
