#![deny(clippy::unwrap_used)]

mod cmd;
mod common;
mod config;
mod fetch;
mod hydrate;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use common::STARTING;
use std::path::PathBuf;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Inlay::parse();

    tracing_subscriber::registry()
        // Filter spans based on the configured verbosity.
        .with(eval_logging(&cli))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        // Install this registry as the global tracing registry.
        .try_init()
        .context("error initializing logging")?;

    tracing::info!(
        "{} Starting {} {}",
        STARTING,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    cli.run().await
}

fn eval_logging(cli: &Inlay) -> tracing_subscriber::EnvFilter {
    let directives = match (cli.verbose, cli.quiet) {
        // quiet overrides verbose
        (_, true) => "error,inlay=warn",
        // increase verbosity
        (0, false) => "error,inlay=info",
        (1, false) => "error,inlay=debug",
        (_, false) => "error,inlay=trace",
    };
    tracing_subscriber::EnvFilter::new(directives)
}

/// Hydrate static HTML pages with values fetched from the web.
#[derive(Parser)]
#[command(about, author, version)]
struct Inlay {
    #[command(subcommand)]
    action: InlaySubcommands,
    /// Path to the Inlay config file [default: Inlay.toml]
    #[arg(long, env = "INLAY_CONFIG", global(true))]
    pub config: Option<PathBuf>,
    /// Enable verbose logging.
    #[arg(short, long, global(true), action=ArgAction::Count)]
    pub verbose: u8,
    /// Be more quiet, conflicts with --verbose
    #[arg(short, long, global(true), conflicts_with("verbose"))]
    pub quiet: bool,
}

impl Inlay {
    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn run(self) -> Result<()> {
        match self.action {
            InlaySubcommands::Hydrate(inner) => inner.run(self.config).await,
            InlaySubcommands::Clean(inner) => inner.run(self.config).await,
            InlaySubcommands::Config(inner) => inner.run(self.config).await,
        }
    }
}

#[derive(Subcommand)]
enum InlaySubcommands {
    /// Fetch the configured value and write it into the target page.
    Hydrate(cmd::hydrate::Hydrate),
    /// Clean output artifacts.
    Clean(cmd::clean::Clean),
    /// Inlay config controls.
    Config(cmd::config::Config),
}
