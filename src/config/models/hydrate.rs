use crate::config::types::{ConfigDuration, Uri};
use schemars::JsonSchema;
use serde::Deserialize;
use std::path::PathBuf;

/// Config options for the hydrate system.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct Hydrate {
    /// The source HTML page to hydrate [default: index.html]
    #[serde(default)]
    pub target: Option<PathBuf>,

    /// The endpoint to fetch the value from [default: https://app.dingqianliu.com/ping]
    #[serde(default)]
    pub endpoint: Option<Uri>,

    /// The contents of the `value` request header [default: 3]
    #[serde(default)]
    pub value: Option<String>,

    /// The CSS selector of the element receiving the fetched value [default: #my-value]
    #[serde(default)]
    pub selector: Option<String>,

    /// Give up on the request after this long, e.g. "10s" [default: no timeout]
    #[serde(default)]
    pub timeout: Option<ConfigDuration>,

    /// A root certificate chain to trust for the request, in PEM format
    #[serde(default)]
    pub root_certificate: Option<PathBuf>,

    /// Ignore certificate validation errors for the request [default: false]
    #[serde(default)]
    pub accept_invalid_certs: bool,
}
