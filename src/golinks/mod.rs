//! GoLinks API client module
//!
//! This module provides functionality to interact with the GoLinks REST API.

mod auth;
mod client;
mod credentials;
pub mod form;
pub mod links;
pub mod traits;

pub use auth::AuthResponse;
pub use client::GolinksClient;
pub use credentials::TokenResolver;
pub use form::FormData;
pub use links::{
    run_create_link_command, run_delete_link_command, run_get_link_command,
    run_get_links_command, run_update_link_command, Geolink, Link, LinkPage, LinkPlan,
    LinkResource, LinkSpec, LinkState,
};
pub use traits::GolinksResource;
