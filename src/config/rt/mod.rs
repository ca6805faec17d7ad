mod clean;
mod hydrate;

pub use clean::*;
pub use hydrate::*;

use crate::config::{DEFAULT_TARGET, DIST_DIR};
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// The absolute path of the target HTML page, before any filesystem checks.
fn absolute_target(target: Option<PathBuf>, working_directory: &Path) -> PathBuf {
    let mut target = target.unwrap_or_else(|| DEFAULT_TARGET.into());
    if !target.is_absolute() {
        target = working_directory.join(target);
    }
    target
}

/// Resolve the dist dir for a target page: an explicit dist wins, otherwise dist sits next to
/// the page.
fn resolve_dist(dist: Option<PathBuf>, target: &Path, working_directory: &Path) -> PathBuf {
    // The parent falls back to the OS specific root, as that is the only time when no parent
    // could be determined.
    let target_parent = target
        .parent()
        .map(|path| path.to_owned())
        .unwrap_or_else(|| PathBuf::from(MAIN_SEPARATOR.to_string()));

    let mut dist = dist.unwrap_or_else(|| target_parent.join(DIST_DIR));
    if !dist.is_absolute() {
        dist = working_directory.join(dist);
    }
    dist
}
