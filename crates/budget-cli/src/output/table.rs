use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{result_fields, scalar_to_string};

/// Summary fields in the order a reader wants them; anything else the
/// engine adds trails in source order.
const FIELD_ORDER: [&str; 8] = [
    "date",
    "request_date",
    "funds",
    "savings",
    "fixed_costs",
    "spent",
    "available",
    "daily_limit",
];

/// Format output as a two-column table using the tabled crate.
pub fn print_table(value: &Value) {
    let Value::Object(fields) = result_fields(value) else {
        println!("{}", value);
        return;
    };

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for key in FIELD_ORDER {
        if let Some(val) = fields.get(key) {
            builder.push_record([key, &scalar_to_string(val)]);
        }
    }
    for (key, val) in fields {
        if !FIELD_ORDER.contains(&key.as_str()) {
            builder.push_record([key.as_str(), &scalar_to_string(val)]);
        }
    }
    println!("{}", Table::from(builder));

    // Warnings from the engine envelope, when present.
    if let Some(Value::Array(warnings)) = value.get("warnings") {
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
