use crate::config::{Configuration, Core};
use std::path::PathBuf;

/// Runtime config for the clean system.
#[derive(Clone, Debug)]
pub struct RtcClean {
    /// The directory removed by the clean.
    pub dist: PathBuf,
}

impl RtcClean {
    /// Construct a new instance.
    ///
    /// The dist dir resolves the same way the hydrate system resolves it, but is not required to
    /// exist.
    pub(crate) fn new(config: Configuration, working_directory: PathBuf) -> Self {
        let Configuration { core, hydrate } = config;
        let Core { dist } = core;

        // Follow the hydrate system's canonical target when the page is still around.
        let target = super::absolute_target(hydrate.target, &working_directory);
        let target = target.canonicalize().unwrap_or(target);

        Self {
            dist: super::resolve_dist(dist, &target, &working_directory),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dist_defaults_next_to_target() {
        let cfg = RtcClean::new(Configuration::default(), PathBuf::from("/work"));
        assert_eq!(cfg.dist, PathBuf::from("/work/dist"));
    }

    #[test]
    fn dist_override_wins() {
        let mut config = Configuration::default();
        config.core.dist = Some(PathBuf::from("out"));

        let cfg = RtcClean::new(config, PathBuf::from("/work"));
        assert_eq!(cfg.dist, PathBuf::from("/work/out"));
    }

    #[cfg(unix)]
    #[test]
    fn dist_follows_the_canonical_target() {
        let dir = tempfile::tempdir().expect("must create temp dir");
        let pages = dir.path().join("pages");
        std::fs::create_dir(&pages).expect("must create dir");
        std::fs::write(pages.join("index.html"), "<html></html>").expect("must write page");
        std::os::unix::fs::symlink(pages.join("index.html"), dir.path().join("page.html"))
            .expect("must link page");

        let mut config = Configuration::default();
        config.hydrate.target = Some("page.html".into());

        let cfg = RtcClean::new(config, dir.path().to_path_buf());

        let pages = pages.canonicalize().expect("must canonicalize");
        assert_eq!(cfg.dist, pages.join("dist"));
    }
}
