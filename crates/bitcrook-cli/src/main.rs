//! bitcrook - OSINT lookup tool.
//!
//! A thin wrapper over the `caselaw` client: it loads `.env`, sets up
//! logging, prints the banner and renders search results.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

pub(crate) const VERSION: &str = env!("BITCROOK_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing, so `.env` can supply flag defaults.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    match dotenv {
        Ok(path) => debug!(path = %path.display(), "loaded environment file"),
        Err(e) if e.not_found() => debug!("no .env file found"),
        Err(e) => warn!(error = %e, "failed to load .env file"),
    }

    if !cli.no_banner {
        output::banner(VERSION);
    }

    match cli.command {
        Commands::Caselaw(args) => commands::caselaw::run(args).await,
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
