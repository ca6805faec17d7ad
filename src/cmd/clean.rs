use crate::{
    common::remove_dir_all,
    config::{self, rt::RtcClean, Configuration},
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Clean output artifacts.
#[derive(Clone, Debug, Args)]
#[command(name = "clean")]
#[command(next_help_heading = "Clean")]
pub struct Clean {
    /// The output dir to remove
    #[arg(short, long)]
    pub dist: Option<PathBuf>,
}

impl Clean {
    /// apply CLI overrides to the configuration
    pub fn apply_to(self, mut config: Configuration) -> Result<Configuration> {
        let Self { dist } = self;

        config.core.dist = dist.or(config.core.dist);

        Ok(config)
    }

    #[tracing::instrument(level = "trace", skip(self, config))]
    pub async fn run(self, config: Option<PathBuf>) -> Result<()> {
        let (cfg, working_directory) = config::load(config)?;

        let cfg = self.apply_to(cfg)?;
        let cfg = RtcClean::new(cfg, working_directory);

        tracing::debug!("cleaning {}", cfg.dist.display());
        remove_dir_all(cfg.dist).await?;

        Ok(())
    }
}
