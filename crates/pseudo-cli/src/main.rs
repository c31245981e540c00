//! pseudo - CLI for the pseudonym search and user-management services.
//!
//! A thin wrapper over `pseudo-http`: `search` requests a pseudonym for a
//! record, `manage` enrolls, revokes and sets up users.

mod cli;
mod commands;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use pseudo_core::ClientConfig;

use cli::{Cli, Commands};
use commands::{manage, search};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let config = ClientConfig::new(&cli.search_url, &cli.management_url)
        .context("Invalid service URL")?;
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Search(args) => search::run(args, &config).await,
        Commands::Manage(cmd) => manage::handle(cmd, &config).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // Logs go to stderr so stdout stays parseable
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
