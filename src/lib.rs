//! golinksctl - Manage GoLinks from the command line
//!
//! A CLI tool and client library for the GoLinks REST API.
//!
//! # Features
//!
//! - List golinks and look them up by name or gid
//! - Create, update and delete golinks
//! - Tags, aliases and per-location geolinks
//! - Multiple output formats (table, CSV, JSON, YAML)
//!
//! # Example
//!
//! ```bash
//! # List all golinks
//! golinksctl get links
//!
//! # Show one golink
//! golinksctl get link docs -o json
//!
//! # Create a private golink
//! golinksctl create link --name docs --url https://example.com --private --tag eng
//!
//! # Rename a golink
//! golinksctl update link 1234 --name documentation
//!
//! # Delete without prompting
//! golinksctl delete link 1234 -y
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod golinks;
pub mod output;
pub mod ui;

pub use cli::{
    Cli, Command, CreateResource, DeleteResource, GetResource, OutputFormat, UpdateResource,
};
pub use error::{GolinksError, Result};
pub use golinks::{
    run_create_link_command, run_delete_link_command, run_get_link_command,
    run_get_links_command, run_update_link_command, FormData, GolinksClient, GolinksResource,
    Link, LinkPlan, LinkResource, LinkSpec, LinkState, TokenResolver,
};
pub use output::{output_link, output_links};
