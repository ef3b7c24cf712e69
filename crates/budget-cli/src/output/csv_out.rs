use serde_json::Value;
use std::io;

use super::{result_fields, scalar_to_string};

/// Write the computed fields as two-column CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match result_fields(value) {
        Value::Object(fields) => {
            let _ = wtr.write_record(["field", "value"]);
            for (key, val) in fields {
                let _ = wtr.write_record([key.as_str(), &scalar_to_string(val)]);
            }
        }
        other => {
            let _ = wtr.write_record([&scalar_to_string(other)]);
        }
    }

    let _ = wtr.flush();
}
