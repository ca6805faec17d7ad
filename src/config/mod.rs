//! Configuration: the user-provided model, the runtime model, and the value types shared by both.

pub mod models;
pub mod rt;
pub mod types;

pub use models::*;

/// Name of the default output directory.
pub(crate) const DIST_DIR: &str = "dist";

/// Name of the default target page.
pub(crate) const DEFAULT_TARGET: &str = "index.html";

/// The endpoint queried when none is configured.
pub(crate) const DEFAULT_ENDPOINT: &str = "https://app.dingqianliu.com/ping";

/// The `value` header contents sent when none are configured.
pub(crate) const DEFAULT_VALUE: &str = "3";

/// The selector targeted when none is configured.
pub(crate) const DEFAULT_SELECTOR: &str = "#my-value";
