use schemars::JsonSchema;
use serde::Deserialize;
use std::path::PathBuf;

/// Config options for the core project.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct Core {
    /// The output dir for the hydrated page [default: dist]
    #[serde(default)]
    pub dist: Option<PathBuf>,
}
