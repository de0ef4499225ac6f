//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON, YAML

pub mod common;
mod links;

pub use common::{escape_csv, format_timestamp};
pub use links::{output_link, output_links};
