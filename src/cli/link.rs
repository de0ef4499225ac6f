//! Create/update command definitions and shared link field arguments

use clap::{Args, Parser, Subcommand};

use super::common::OutputFormat;
use crate::golinks::links::parse_geolink;
use crate::golinks::Geolink;

/// Resource types for the 'create' command
#[derive(Subcommand, Debug)]
pub enum CreateResource {
    /// Create a golink
    #[command(visible_alias = "golink")]
    Link(CreateLinkArgs),
}

/// Resource types for the 'update' command
#[derive(Subcommand, Debug)]
pub enum UpdateResource {
    /// Update a golink by gid (unspecified fields keep their current values)
    #[command(visible_alias = "golink")]
    Link(UpdateLinkArgs),
}

/// Arguments for 'create link'
#[derive(Parser, Debug)]
pub struct CreateLinkArgs {
    /// Link name (go/<name>)
    #[arg(long)]
    pub name: String,

    /// Destination URL
    #[arg(long)]
    pub url: String,

    #[command(flatten)]
    pub fields: LinkFieldArgs,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'update link'
#[derive(Parser, Debug)]
pub struct UpdateLinkArgs {
    /// Golink gid
    pub gid: i64,

    /// New link name
    #[arg(long)]
    pub name: Option<String>,

    /// New destination URL
    #[arg(long)]
    pub url: Option<String>,

    #[command(flatten)]
    pub fields: LinkFieldArgs,

    /// Remove all tags
    #[arg(long, default_value_t = false, conflicts_with = "tags")]
    pub clear_tags: bool,

    /// Remove all aliases
    #[arg(long, default_value_t = false, conflicts_with = "aliases")]
    pub clear_aliases: bool,

    /// Remove all geolinks
    #[arg(long, default_value_t = false, conflicts_with = "geolinks")]
    pub clear_geolinks: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Optional golink fields shared by create and update
///
/// Flags accept `--flag`, `--flag=true` or `--flag=false`.
#[derive(Args, Debug, Default)]
pub struct LinkFieldArgs {
    /// Brief description of the link
    #[arg(long)]
    pub description: Option<String>,

    /// Hide the link from the shared directory
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub unlisted: Option<bool>,

    /// Make the link private (private links are always unlisted)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub private: Option<bool>,

    /// Allow access from outside the organization
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub public: Option<bool>,

    /// Auto-format the link name
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub format: Option<bool>,

    /// Hyphenate the formatted name (requires --format)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub hyphens: Option<bool>,

    /// Tag name (repeatable)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Alternative name for the link (repeatable)
    #[arg(long = "alias", value_name = "ALIAS")]
    pub aliases: Vec<String>,

    /// Location override as LOCATION=URL, e.g. US-CA=https://... (repeatable)
    #[arg(long = "geolink", value_name = "LOCATION=URL", value_parser = parse_geolink)]
    pub geolinks: Vec<Geolink>,
}
