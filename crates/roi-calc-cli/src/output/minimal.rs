use serde_json::Value;

use super::{flatten, lookup, scalar_text};

/// Paths checked in order for the single headline answer.
const PRIORITY_PATHS: [&str; 4] = [
    "result.realized.roi_percent",
    "cards.0.headline_roi",
    "csv_path",
    "total_spent",
];

/// Print just the key answer value from the output, falling back to the
/// first flattened field.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_text(value));
}

fn minimal_text(value: &Value) -> String {
    for path in PRIORITY_PATHS {
        if let Some(val) = lookup(value, path) {
            if !val.is_null() {
                return scalar_text(val, "null");
            }
        }
    }

    let mut flat = Vec::new();
    flatten(value, "", &mut flat);
    match flat.first() {
        Some((key, val)) if !key.is_empty() => format!("{}: {}", key, scalar_text(val, "null")),
        _ => scalar_text(value, "null"),
    }
}
