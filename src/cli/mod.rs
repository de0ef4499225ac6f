//! CLI argument parsing

mod common;
mod delete;
mod get;
mod link;

use clap::{Parser, Subcommand};

use crate::config::{api, credentials, defaults};

pub use common::OutputFormat;
pub use delete::{DeleteLinkArgs, DeleteResource};
pub use get::{GetResource, LinkArgs, LinksArgs};
pub use link::{CreateLinkArgs, CreateResource, LinkFieldArgs, UpdateLinkArgs, UpdateResource};

/// GoLinks CLI
#[derive(Parser, Debug)]
#[command(name = "golinksctl")]
#[command(version)]
#[command(about = "Manage GoLinks from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// API token (falls back to the GOLINKS_TOKEN environment variable)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// GoLinks API base URL
    #[arg(
        long,
        global = true,
        env = credentials::API_URL_ENV_VAR,
        default_value = api::HOST_URL
    )]
    pub api_url: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode - no spinners, no interactive prompts
    #[arg(short, long, global = true, default_value_t = false)]
    pub batch: bool,
}

/// Top-level verbs
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show one or many golinks
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },

    /// Create a golink
    Create {
        #[command(subcommand)]
        resource: CreateResource,
    },

    /// Update a golink
    Update {
        #[command(subcommand)]
        resource: UpdateResource,
    },

    /// Delete a golink
    Delete {
        #[command(subcommand)]
        resource: DeleteResource,
    },
}
