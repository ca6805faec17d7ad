use crate::{
    config::{
        self,
        rt::RtcHydrate,
        types::{ConfigDuration, Uri},
        Configuration,
    },
    hydrate::HydrateSystem,
};
use anyhow::Result;
use clap::Args;
use std::{path::PathBuf, sync::Arc};

/// Fetch the configured value and write it into the target page.
#[derive(Clone, Debug, Args)]
#[command(name = "hydrate")]
#[command(next_help_heading = "Hydrate")]
pub struct Hydrate {
    /// The source HTML page to hydrate
    pub target: Option<PathBuf>,

    /// The output dir for the hydrated page
    #[arg(short, long)]
    pub dist: Option<PathBuf>,

    /// The endpoint to fetch the value from
    #[arg(long)]
    pub endpoint: Option<Uri>,

    /// The contents of the `value` request header
    #[arg(long)]
    pub value: Option<String>,

    /// The CSS selector of the element receiving the fetched value
    #[arg(long)]
    pub selector: Option<String>,

    /// Give up on the request after this long, e.g. "10s"
    #[arg(long)]
    pub timeout: Option<ConfigDuration>,

    /// When desired, set a custom root certificate chain (same format as Cargo's config.toml http.cainfo)
    #[arg(long)]
    pub root_certificate: Option<PathBuf>,

    /// Allows the request to ignore certificate validation errors.
    ///
    /// Can be useful when behind a corporate proxy.
    #[arg(long)]
    pub accept_invalid_certs: Option<bool>,
}

impl Hydrate {
    /// apply CLI overrides to the configuration
    pub fn apply_to(self, mut config: Configuration) -> Result<Configuration> {
        let Self {
            target,
            dist,
            endpoint,
            value,
            selector,
            timeout,
            root_certificate,
            accept_invalid_certs,
        } = self;

        config.hydrate.target = target.or(config.hydrate.target);
        config.core.dist = dist.or(config.core.dist);
        config.hydrate.endpoint = endpoint.or(config.hydrate.endpoint);
        config.hydrate.value = value.or(config.hydrate.value);
        config.hydrate.selector = selector.or(config.hydrate.selector);
        config.hydrate.timeout = timeout.or(config.hydrate.timeout);
        config.hydrate.root_certificate = root_certificate.or(config.hydrate.root_certificate);
        config.hydrate.accept_invalid_certs =
            accept_invalid_certs.unwrap_or(config.hydrate.accept_invalid_certs);

        Ok(config)
    }

    #[tracing::instrument(level = "trace", skip(self, config))]
    pub async fn run(self, config: Option<PathBuf>) -> Result<()> {
        let (cfg, working_directory) = config::load(config)?;

        let cfg = self.apply_to(cfg)?;
        let cfg = RtcHydrate::new(cfg, working_directory)?;

        let system = HydrateSystem::new(Arc::new(cfg));
        system.run().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_overrides() -> Hydrate {
        Hydrate {
            target: None,
            dist: None,
            endpoint: None,
            value: None,
            selector: None,
            timeout: None,
            root_certificate: None,
            accept_invalid_certs: None,
        }
    }

    #[test]
    fn cli_overrides_win() {
        let mut config = Configuration::default();
        config.hydrate.value = Some("3".into());
        config.hydrate.selector = Some("#a".into());

        let cli = Hydrate {
            value: Some("7".into()),
            ..no_overrides()
        };

        let config = cli.apply_to(config).expect("must apply");
        assert_eq!(config.hydrate.value.as_deref(), Some("7"));
        // untouched fields keep their configured values
        assert_eq!(config.hydrate.selector.as_deref(), Some("#a"));
    }
}
