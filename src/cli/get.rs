//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// List golinks
    #[command(visible_alias = "golinks")]
    Links(LinksArgs),

    /// Show a single golink by name or gid
    #[command(visible_alias = "golink")]
    Link(LinkArgs),
}

/// Arguments for 'get links' subcommand
#[derive(Parser, Debug)]
pub struct LinksArgs {
    /// Filter golinks by name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Hide table/CSV headers
    #[arg(long, default_value_t = false)]
    pub no_header: bool,
}

/// Arguments for 'get link' subcommand
#[derive(Parser, Debug)]
pub struct LinkArgs {
    /// Golink name, or its numeric gid
    pub name: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
