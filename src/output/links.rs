//! Golink output formatter

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::{escape_csv, format_timestamp, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::golinks::{Link, LinkState};

/// Flattened golink row for table/CSV output
#[derive(Serialize, Debug, Clone, PartialEq)]
struct LinkRow {
    gid: i64,
    name: String,
    url: String,
    description: String,
    tags: String,
    visibility: String,
    hits: i64,
    updated_at: String,
}

impl From<&Link> for LinkRow {
    fn from(link: &Link) -> Self {
        Self {
            gid: link.gid,
            name: link.name.clone(),
            url: link.url.clone(),
            description: link.description.clone(),
            tags: link.tag_names().join(" "),
            visibility: visibility(
                link.private.unwrap_or(false),
                link.unlisted,
                link.public.unwrap_or(false),
            ),
            hits: link.redirect_hits.alltime,
            updated_at: format_timestamp(link.updated_at),
        }
    }
}

/// Placeholder for values the API does not report
const UNKNOWN: &str = "(not reported)";

fn known_flag(value: Option<bool>) -> String {
    value.map_or_else(|| UNKNOWN.to_string(), |v| v.to_string())
}

/// Summary of the three independent visibility flags
fn visibility(private: bool, unlisted: bool, public: bool) -> String {
    let mut parts = Vec::new();
    if private {
        parts.push("private");
    } else if unlisted {
        parts.push("unlisted");
    } else {
        parts.push("listed");
    }
    if public {
        parts.push("public");
    }
    parts.join(",")
}

/// Output a list of golinks in the specified format
pub fn output_links(links: &[Link], format: &OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => output_table(links, no_header),
        OutputFormat::Csv => output_csv(links, no_header),
        OutputFormat::Json => print_json(links),
        OutputFormat::Yaml => print_yaml(links),
    }
}

fn output_table(links: &[Link], no_header: bool) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec![
            "GID",
            "Name",
            "URL",
            "Tags",
            "Visibility",
            "Hits",
            "Updated At",
        ]);
    }

    for row in links.iter().map(LinkRow::from) {
        table.add_row(vec![
            row.gid.to_string(),
            row.name,
            row.url,
            row.tags,
            row.visibility,
            row.hits.to_string(),
            row.updated_at,
        ]);
    }

    println!("{table}");
    if !no_header {
        println!("\nTotal: {} golink(s)", links.len());
    }
}

fn output_csv(links: &[Link], no_header: bool) {
    if !no_header {
        println!("gid,name,url,description,tags,visibility,hits,updated_at");
    }

    for row in links.iter().map(LinkRow::from) {
        println!(
            "{},{},{},{},{},{},{},{}",
            row.gid,
            escape_csv(&row.name),
            escape_csv(&row.url),
            escape_csv(&row.description),
            escape_csv(&row.tags),
            escape_csv(&row.visibility),
            row.hits,
            escape_csv(&row.updated_at)
        );
    }
}

/// Output a single golink state
///
/// Table output is a key/value listing; JSON/YAML dump the full state.
pub fn output_link(state: &LinkState, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(state),
        OutputFormat::Yaml => print_yaml(state),
        OutputFormat::Csv => {
            println!("field,value");
            for (field, value) in detail_rows(state) {
                println!("{},{}", field, escape_csv(&value));
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            for (field, value) in detail_rows(state) {
                table.add_row(vec![field.to_string(), value]);
            }
            println!("{table}");
        }
    }
}

fn detail_rows(state: &LinkState) -> Vec<(&'static str, String)> {
    let geolinks = state
        .geolinks
        .as_ref()
        .map(|geolinks| {
            geolinks
                .iter()
                .map(|g| format!("{}={}", g.location, g.url))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_else(|| UNKNOWN.to_string());
    let aliases = state
        .aliases
        .as_ref()
        .map(|aliases| aliases.join(" "))
        .unwrap_or_else(|| UNKNOWN.to_string());
    let owner = if state.user.username.is_empty() {
        state.user.email.clone()
    } else {
        state.user.username.clone()
    };

    vec![
        ("gid", state.gid.to_string()),
        ("name", state.name.clone()),
        ("url", state.url.clone()),
        ("description", state.description.clone()),
        (
            "visibility",
            visibility(
                state.private.unwrap_or(false),
                state.unlisted,
                state.public.unwrap_or(false),
            ),
        ),
        ("private", known_flag(state.private)),
        ("public", known_flag(state.public)),
        ("format", state.format.to_string()),
        ("hyphens", state.hyphens.to_string()),
        ("tags", state.tags.join(" ")),
        ("aliases", aliases),
        ("geolinks", geolinks),
        ("owner", owner),
        ("variable_link", state.variable_link.to_string()),
        ("pinned", state.pinned.to_string()),
        (
            "hits",
            format!(
                "{} today, {} week, {} month, {} all time",
                state.redirect_hits.daily,
                state.redirect_hits.weekly,
                state.redirect_hits.monthly,
                state.redirect_hits.alltime
            ),
        ),
        ("created_at", format_timestamp(state.created_at)),
        ("updated_at", format_timestamp(state.updated_at)),
    ]
}
