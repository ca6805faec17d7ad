//! The hydrate system: fetch the configured value and write it into the target page.

use crate::{
    common::{html_rewrite::Document, strip_prefix, SERVER, SUCCESS},
    config::rt::RtcHydrate,
    fetch::{self, FetchError, HttpClientOptions, RequestConfig},
};
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

/// A failure of the hydration operation itself.
///
/// Host-side problems, like an unreadable page or a broken config, surface as plain `anyhow`
/// errors instead.
#[derive(Debug, thiserror::Error)]
pub enum HydrateError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// No element of the page matches the selector.
    #[error("no element matches selector {selector:?} in {page:?}")]
    TargetMissing { selector: String, page: PathBuf },
}

/// The canonical text form of a decoded JSON value.
///
/// Strings render as their bare contents, any other value as its compact JSON serialization.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// The hydrate system.
pub struct HydrateSystem {
    /// Runtime config.
    cfg: Arc<RtcHydrate>,
}

impl HydrateSystem {
    /// Construct a new instance.
    pub fn new(cfg: Arc<RtcHydrate>) -> Self {
        Self { cfg }
    }

    /// Run a single hydration pass over the target page.
    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn run(&self) -> Result<()> {
        let cfg = &self.cfg;

        // The source page is read in full before anything else happens; the fetch only ever runs
        // for a loaded page.
        let page = tokio::fs::read(&cfg.target)
            .await
            .with_context(|| format!("error reading source page {:?}", &cfg.target))?;
        let mut document = Document::new(page);

        tracing::info!("{}fetching value from {}", SERVER, &cfg.endpoint);

        let client = fetch::get_http_client(&HttpClientOptions {
            #[cfg(any(feature = "native-tls", feature = "rustls"))]
            root_certificate: cfg.root_certificate.clone(),
            #[cfg(any(feature = "native-tls", feature = "rustls"))]
            accept_invalid_certificates: cfg.accept_invalid_certs,
            timeout: cfg.timeout,
        })
        .await?;

        let request = RequestConfig::new(cfg.endpoint.clone(), &cfg.value)?;
        let value = fetch::fetch_value(&client, request)
            .await
            .map_err(HydrateError::from)?;

        tracing::debug!(%value, "decoded value");

        let text = value_text(&value);
        if document.len(&cfg.selector_parsed)? == 0 {
            return Err(HydrateError::TargetMissing {
                selector: cfg.selector.clone(),
                page: cfg.target.clone(),
            }
            .into());
        }
        document.set_text(&cfg.selector_parsed, &text)?;

        // Only a fully hydrated page is ever written out.
        tokio::fs::write(&cfg.final_output, document.into_inner())
            .await
            .with_context(|| format!("error writing hydrated page {:?}", &cfg.final_output))?;

        tracing::info!("{}wrote {}", SUCCESS, strip_prefix(&cfg.final_output).display());

        Ok(())
    }
}
