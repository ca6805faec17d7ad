use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::config::{self, Configuration};

/// Inlay config controls.
#[derive(Clone, Debug, Args)]
#[command(name = "config")]
pub struct Config {
    #[command(subcommand)]
    action: ConfigSubcommands,
}

impl Config {
    #[tracing::instrument(level = "trace", skip(self, config))]
    pub async fn run(self, config: Option<PathBuf>) -> Result<()> {
        match self.action {
            ConfigSubcommands::Show => {
                let (cfg, _) = config::load(config)?;
                println!("{:#?}", cfg);
            }
            ConfigSubcommands::Schema => {
                let schema = schemars::schema_for!(Configuration);
                println!(
                    "{}",
                    serde_json::to_string_pretty(&schema)
                        .context("error serializing configuration schema")?
                );
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Subcommand)]
enum ConfigSubcommands {
    /// Show inlay's current config pre-CLI.
    Show,
    /// Print the JSON schema of the configuration file format.
    Schema,
}
