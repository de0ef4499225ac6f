//! Common utilities for output formatters

use chrono::DateTime;
use serde::Serialize;

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render a Unix timestamp as RFC 3339 (UTC); zero or out-of-range renders empty
pub fn format_timestamp(secs: i64) -> String {
    if secs <= 0 {
        return String::new();
    }
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}

/// Print a value as YAML
pub fn print_yaml<T: Serialize + ?Sized>(data: &T) {
    match serde_yml::to_string(data) {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => eprintln!("Error serializing to YAML: {}", e),
    }
}
