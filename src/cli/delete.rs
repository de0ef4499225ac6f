//! Delete command resource definitions and arguments

use clap::{Parser, Subcommand};

/// Resource types for the 'delete' command
#[derive(Subcommand, Debug)]
pub enum DeleteResource {
    /// Delete a golink by gid
    #[command(visible_alias = "golink")]
    Link(DeleteLinkArgs),
}

/// Arguments for 'delete link' subcommand
#[derive(Parser, Debug)]
pub struct DeleteLinkArgs {
    /// Golink gid
    pub gid: i64,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
