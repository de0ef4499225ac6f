//! Golink command handlers

use log::debug;

use crate::cli::{
    Cli, Command, CreateResource, DeleteResource, GetResource, LinkFieldArgs, UpdateLinkArgs,
    UpdateResource,
};
use crate::error::GolinksError;
use crate::golinks::GolinksClient;
use crate::output::{output_link, output_links};
use crate::ui::{confirm_action, create_spinner, finish_spinner};

use super::models::Geolink;
use super::plan::LinkPlan;
use super::resource::LinkResource;
use super::state::LinkState;

/// Parse a `LOCATION=URL` geolink argument
pub fn parse_geolink(s: &str) -> Result<Geolink, String> {
    let Some((location, url)) = s.split_once('=') else {
        return Err(format!("invalid geolink '{}': expected LOCATION=URL", s));
    };
    let (location, url) = (location.trim(), url.trim());
    if location.is_empty() || url.is_empty() {
        return Err(format!(
            "invalid geolink '{}': location and url must not be empty",
            s
        ));
    }
    Ok(Geolink::new(location, url))
}

/// Run the get links command
pub async fn run_get_links_command(
    client: &GolinksClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Links(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner("Fetching golinks...", cli.batch);
    let result = LinkResource::new(client).read_links().await;
    finish_spinner(spinner);
    let page = result?;

    debug!(
        "Fetched {} golink(s), server reports {} total",
        page.results.len(),
        page.metadata.total_results
    );

    let links: Vec<_> = match &args.filter {
        Some(filter) => {
            let needle = filter.to_lowercase();
            page.results
                .into_iter()
                .filter(|link| link.name.to_lowercase().contains(&needle))
                .collect()
        }
        None => page.results,
    };

    output_links(&links, &args.output, args.no_header);
    Ok(())
}

/// Run the get link command (by name, or by gid when numeric)
pub async fn run_get_link_command(
    client: &GolinksClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Link(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let resource = LinkResource::new(client);
    let spinner = create_spinner(&format!("Fetching golink '{}'...", args.name), cli.batch);
    let result = if args.name.trim().parse::<i64>().is_ok() {
        debug!("Looking up golink by gid {}", args.name);
        resource.import(&args.name).await
    } else {
        debug!("Looking up golink by name '{}'", args.name);
        resource.read_link_by_name(&args.name).await
    };
    finish_spinner(spinner);

    output_link(&result?, &args.output);
    Ok(())
}

/// Run the create link command
pub async fn run_create_link_command(
    client: &GolinksClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Create {
        resource: CreateResource::Link(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let mut plan = LinkPlan::new(&args.name, &args.url);
    apply_fields(&mut plan, &args.fields);

    let spinner = create_spinner(&format!("Creating golink '{}'...", args.name), cli.batch);
    let result = LinkResource::new(client).create(plan).await;
    finish_spinner(spinner);
    let state = result?;

    if args.output.is_human_readable() {
        println!("✓ Created golink '{}' (gid {})", state.name, state.gid);
    }
    output_link(&state, &args.output);
    Ok(())
}

/// Run the update link command
///
/// Starts from the link's current values so that only the given fields change.
/// The update replaces every field, so values the API does not report must
/// be given on the command line.
pub async fn run_update_link_command(
    client: &GolinksClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Update {
        resource: UpdateResource::Link(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let resource = LinkResource::new(client);
    let spinner = create_spinner(&format!("Updating golink {}...", args.gid), cli.batch);

    let result = async {
        let current = resource.import(&args.gid.to_string()).await?;
        require_unreported_fields(&current, args)?;
        let mut plan = current.to_plan();
        if let Some(name) = &args.name {
            plan.name = name.clone();
        }
        if let Some(url) = &args.url {
            plan.url = url.clone();
        }
        apply_fields(&mut plan, &args.fields);
        if args.clear_tags {
            plan.tags.clear();
        }
        if args.clear_aliases {
            plan.aliases.clear();
        }
        if args.clear_geolinks {
            plan.geolinks.clear();
        }
        resource.update(plan, &current).await
    }
    .await;
    finish_spinner(spinner);
    let state = result?;

    if args.output.is_human_readable() {
        println!("✓ Updated golink '{}' (gid {})", state.name, state.gid);
    }
    output_link(&state, &args.output);
    Ok(())
}

/// Run the delete link command
pub async fn run_delete_link_command(
    client: &GolinksClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Delete {
        resource: DeleteResource::Link(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let resource = LinkResource::new(client);
    let state = resource.import(&args.gid.to_string()).await?;

    let prompt = format!("Delete golink '{}' (gid {})?", state.name, state.gid);
    if !confirm_action(&prompt, args.yes || cli.batch)? {
        println!("Cancelled");
        return Ok(());
    }

    let spinner = create_spinner(&format!("Deleting golink '{}'...", state.name), cli.batch);
    let result = resource.delete(&state).await;
    finish_spinner(spinner);
    result?;

    println!("✓ Deleted golink '{}' (gid {})", state.name, state.gid);
    Ok(())
}

/// Fail when a field the API does not report is neither known nor given
fn require_unreported_fields(
    current: &LinkState,
    args: &UpdateLinkArgs,
) -> Result<(), GolinksError> {
    let missing: Vec<&str> = current
        .unknown_fields()
        .into_iter()
        .filter_map(|field| match field {
            "private" if args.fields.private.is_none() => Some("--private=<true|false>"),
            "public" if args.fields.public.is_none() => Some("--public=<true|false>"),
            "aliases" if args.fields.aliases.is_empty() && !args.clear_aliases => {
                Some("--alias or --clear-aliases")
            }
            "geolinks" if args.fields.geolinks.is_empty() && !args.clear_geolinks => {
                Some("--geolink or --clear-geolinks")
            }
            _ => None,
        })
        .collect();

    if missing.is_empty() {
        return Ok(());
    }
    Err(GolinksError::Validation(format!(
        "golink {} does not report its current {}; an update replaces every field, so pass {}",
        current.gid,
        current.unknown_fields().join(", "),
        missing.join(", ")
    )))
}

/// Overlay explicitly given field arguments onto a plan
fn apply_fields(plan: &mut LinkPlan, fields: &LinkFieldArgs) {
    if let Some(description) = &fields.description {
        plan.description = Some(description.clone());
    }
    if fields.unlisted.is_some() {
        plan.unlisted = fields.unlisted;
    }
    if fields.private.is_some() {
        plan.private = fields.private;
    }
    if fields.public.is_some() {
        plan.public = fields.public;
    }
    if fields.format.is_some() {
        plan.format = fields.format;
        // turning format off drops an inherited hyphens setting
        if fields.format == Some(false) && fields.hyphens.is_none() {
            plan.hyphens = Some(false);
        }
    }
    if fields.hyphens.is_some() {
        plan.hyphens = fields.hyphens;
    }
    if !fields.tags.is_empty() {
        plan.tags = fields.tags.clone();
    }
    if !fields.aliases.is_empty() {
        plan.aliases = fields.aliases.clone();
    }
    if !fields.geolinks.is_empty() {
        plan.geolinks = fields.geolinks.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_geolink() {
        let geo = parse_geolink("US-CA=https://ca.example.com/?a=b").unwrap();
        assert_eq!(geo.location, "US-CA");
        assert_eq!(geo.url, "https://ca.example.com/?a=b");
    }

    #[test]
    fn test_parse_geolink_rejects_missing_separator() {
        assert!(parse_geolink("US-CA").is_err());
    }

    #[test]
    fn test_parse_geolink_rejects_empty_parts() {
        assert!(parse_geolink("=https://example.com").is_err());
        assert!(parse_geolink("DE=").is_err());
    }

    #[test]
    fn test_apply_fields_overlays_only_given_values() {
        let mut plan = LinkPlan::new("docs", "https://example.com");
        plan.description = Some("Old".to_string());
        plan.tags = vec!["eng".to_string()];

        let fields = LinkFieldArgs {
            private: Some(true),
            aliases: vec!["d".to_string()],
            ..Default::default()
        };
        apply_fields(&mut plan, &fields);

        assert_eq!(plan.description.as_deref(), Some("Old"));
        assert_eq!(plan.private, Some(true));
        assert_eq!(plan.tags, vec!["eng"]);
        assert_eq!(plan.aliases, vec!["d"]);
    }

    #[test]
    fn test_apply_fields_format_off_clears_hyphens() {
        let mut plan = LinkPlan::new("docs", "https://example.com");
        plan.format = Some(true);
        plan.hyphens = Some(true);

        let fields = LinkFieldArgs {
            format: Some(false),
            ..Default::default()
        };
        apply_fields(&mut plan, &fields);

        assert_eq!(plan.hyphens, Some(false));
        assert!(plan.modify().is_ok());
    }

    fn update_args(extra: &[&str]) -> UpdateLinkArgs {
        let mut argv = vec!["golinksctl", "update", "link", "5"];
        argv.extend_from_slice(extra);
        let cli = <Cli as clap::Parser>::parse_from(argv);
        let Command::Update {
            resource: UpdateResource::Link(args),
        } = cli.command
        else {
            panic!("Expected update link");
        };
        args
    }

    fn unreported_state() -> LinkState {
        LinkState {
            gid: 5,
            name: "secret".to_string(),
            unlisted: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_update_requires_unreported_fields() {
        let args = update_args(&["--url", "https://b.io"]);
        let err = require_unreported_fields(&unreported_state(), &args).unwrap_err();
        assert!(matches!(err, GolinksError::Validation(_)));
        let msg = err.to_string();
        assert!(msg.contains("--private"));
        assert!(msg.contains("--clear-aliases"));
        assert!(msg.contains("--clear-geolinks"));
    }

    #[test]
    fn test_update_accepts_explicit_unreported_fields() {
        let args = update_args(&[
            "--private=true",
            "--public=false",
            "--alias",
            "s",
            "--clear-geolinks",
        ]);
        assert!(require_unreported_fields(&unreported_state(), &args).is_ok());
    }

    #[test]
    fn test_update_skips_known_fields() {
        let state = LinkState {
            private: Some(true),
            public: Some(false),
            aliases: Some(vec![]),
            geolinks: Some(vec![]),
            ..unreported_state()
        };
        assert!(require_unreported_fields(&state, &update_args(&[])).is_ok());
    }

    #[test]
    fn test_apply_fields_hyphens_without_format_fails_validation() {
        let mut plan = LinkPlan::new("docs", "https://example.com");
        let fields = LinkFieldArgs {
            hyphens: Some(true),
            ..Default::default()
        };
        apply_fields(&mut plan, &fields);
        assert!(plan.modify().is_err());
    }
}
