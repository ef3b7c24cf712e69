use serde_json::Value;

use super::{result_fields, scalar_to_string};

/// Print just the key answer: the daily limit when present, the available
/// amount as a fallback, otherwise the first field.
pub fn print_minimal(value: &Value) {
    let fields = result_fields(value);

    if let Value::Object(map) = fields {
        for key in ["daily_limit", "available"] {
            if let Some(val) = map.get(key) {
                if !val.is_null() {
                    println!("{}", scalar_to_string(val));
                    return;
                }
            }
        }
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, scalar_to_string(val));
            return;
        }
    }

    println!("{}", scalar_to_string(fields));
}
