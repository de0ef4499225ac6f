//! golinksctl - Main entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use golinksctl::{
    run_create_link_command, run_delete_link_command, run_get_link_command,
    run_get_links_command, run_update_link_command, Cli, Command, GetResource, GolinksClient,
    TokenResolver,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting golinksctl v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let token = TokenResolver::new().resolve(cli.token.as_deref())?;

    debug!("Signing in to {}", cli.api_url);
    let client = GolinksClient::connect_to(&token, &cli.api_url).await?;

    match &cli.command {
        Command::Get { resource } => match resource {
            GetResource::Links(_) => run_get_links_command(&client, cli).await,
            GetResource::Link(_) => run_get_link_command(&client, cli).await,
        },
        Command::Create { .. } => run_create_link_command(&client, cli).await,
        Command::Update { .. } => run_update_link_command(&client, cli).await,
        Command::Delete { .. } => run_delete_link_command(&client, cli).await,
    }
}
