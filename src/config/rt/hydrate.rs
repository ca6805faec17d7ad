use crate::config::{Configuration, Core, DEFAULT_ENDPOINT, DEFAULT_SELECTOR, DEFAULT_VALUE};
use anyhow::{Context, Result};
use lol_html::Selector;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime config for the hydrate system.
#[derive(Clone)]
pub struct RtcHydrate {
    /// The source HTML page driving the hydration.
    pub target: PathBuf,
    /// The full path of the emitted page.
    pub final_output: PathBuf,
    /// The endpoint queried for the value.
    pub endpoint: http::Uri,
    /// The contents of the request's `value` header.
    pub value: String,
    /// The selector of the element receiving the value, as configured.
    pub selector: String,
    /// The parsed form of the selector, driving the rewrite.
    pub selector_parsed: Selector,
    /// An optional request timeout.
    pub timeout: Option<Duration>,
    /// An optional root certificate chain for the request.
    pub root_certificate: Option<PathBuf>,
    /// Whether certificate validation errors are ignored.
    pub accept_invalid_certs: bool,
}

impl RtcHydrate {
    /// Construct a new instance.
    pub(crate) fn new(config: Configuration, working_directory: PathBuf) -> Result<Self> {
        let Configuration { core, hydrate } = config;
        let Core { dist } = core;

        // Get the canonical path to the target HTML page.
        let pre_target = super::absolute_target(hydrate.target, &working_directory);
        let target = pre_target.canonicalize().with_context(|| {
            format!(
                "error getting canonical path to source HTML page {:?}",
                &pre_target
            )
        })?;

        // Ensure the final dist dir exists and that we have a canonical path to the dir. Normally
        // we would want to avoid such an action at this layer, however to ensure that other layers
        // have a reliable FS path to work with, we make an exception here.
        let final_dist = super::resolve_dist(dist, &target, &working_directory);
        if !final_dist.exists() {
            std::fs::create_dir(&final_dist)
                .or_else(|err| {
                    if err.kind() == ErrorKind::AlreadyExists {
                        Ok(())
                    } else {
                        Err(err)
                    }
                })
                .with_context(|| {
                    format!("error creating final dist directory {:?}", &final_dist)
                })?;
        }
        let final_dist = final_dist
            .canonicalize()
            .context("error taking canonical path to dist dir")?;

        // The emitted page keeps the name of the source page.
        let final_output = final_dist.join(target.file_name().with_context(|| {
            format!("error getting file name of source HTML page {:?}", &target)
        })?);

        let endpoint = match hydrate.endpoint {
            Some(uri) => uri.0,
            None => DEFAULT_ENDPOINT
                .parse()
                .context("error parsing default endpoint")?,
        };

        let selector = hydrate.selector.unwrap_or_else(|| DEFAULT_SELECTOR.into());
        let selector_parsed = selector
            .parse::<Selector>()
            .with_context(|| format!("invalid selector {:?}", &selector))?;

        Ok(Self {
            target,
            final_output,
            endpoint,
            value: hydrate.value.unwrap_or_else(|| DEFAULT_VALUE.into()),
            selector,
            selector_parsed,
            timeout: hydrate.timeout.map(|timeout| timeout.0),
            root_certificate: hydrate.root_certificate,
            accept_invalid_certs: hydrate.accept_invalid_certs,
        })
    }
}
