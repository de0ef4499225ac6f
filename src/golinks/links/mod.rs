//! Golinks module - models, write requests, API operations and lifecycle handling

mod api;
mod commands;
mod models;
mod plan;
mod resource;
mod spec;
mod state;

pub use commands::{
    parse_geolink, run_create_link_command, run_delete_link_command, run_get_link_command,
    run_get_links_command, run_update_link_command,
};
pub use models::{Geolink, Link, LinkPage, PageLinks, PageMetadata, RedirectHits, Tag, User};
pub use plan::LinkPlan;
pub use resource::LinkResource;
pub use spec::LinkSpec;
pub use state::LinkState;
