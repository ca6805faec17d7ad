use crate::config::{
    load,
    rt::RtcHydrate,
    types::ConfigDuration,
    Configuration, DEFAULT_ENDPOINT, DEFAULT_SELECTOR, DEFAULT_VALUE,
};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;

const FULL_TOML: &str = r##"
dist = "out"

[hydrate]
target = "page.html"
endpoint = "https://example.com/ping"
value = "7"
selector = "#slot"
timeout = "10s"
accept_invalid_certs = true
"##;

const FULL_YAML: &str = r##"
dist: out
hydrate:
  target: page.html
  endpoint: https://example.com/ping
  value: "7"
  selector: "#slot"
  timeout: 10s
  accept_invalid_certs: true
"##;

const FULL_JSON: &str = r##"
{
  "dist": "out",
  "hydrate": {
    "target": "page.html",
    "endpoint": "https://example.com/ping",
    "value": "7",
    "selector": "#slot",
    "timeout": "10s",
    "accept_invalid_certs": true
  }
}
"##;

#[test]
fn deserialize_full() {
    let cfg: Configuration = toml::from_str(FULL_TOML).expect("must parse");

    assert_eq!(cfg.core.dist.as_deref(), Some(Path::new("out")));
    assert_eq!(cfg.hydrate.target.as_deref(), Some(Path::new("page.html")));
    assert_eq!(
        cfg.hydrate.endpoint.as_ref().map(|uri| uri.to_string()),
        Some("https://example.com/ping".to_string())
    );
    assert_eq!(cfg.hydrate.value.as_deref(), Some("7"));
    assert_eq!(cfg.hydrate.selector.as_deref(), Some("#slot"));
    assert_eq!(
        cfg.hydrate.timeout,
        Some(ConfigDuration(Duration::from_secs(10)))
    );
    assert!(cfg.hydrate.accept_invalid_certs);
}

#[test]
fn formats_parse_alike() {
    let from_toml: Configuration = toml::from_str(FULL_TOML).expect("must parse toml");
    let from_yaml: Configuration = serde_yaml::from_str(FULL_YAML).expect("must parse yaml");
    let from_json: Configuration = serde_json::from_str(FULL_JSON).expect("must parse json");

    assert_eq!(from_toml, from_yaml);
    assert_eq!(from_toml, from_json);
}

#[test]
fn deserialize_empty() {
    let cfg: Configuration = toml::from_str("").expect("must parse");
    assert_eq!(cfg, Configuration::default());
}

/// A directory without any config file yields the defaults.
#[test]
fn defaults_without_config_file() {
    let dir = tempdir().expect("must create temp dir");
    fs::write(dir.path().join("index.html"), "<html></html>").expect("must write page");

    let (cfg, cwd) = load(Some(dir.path().to_path_buf())).expect("must load");
    assert_eq!(cfg, Configuration::default());

    let cfg = RtcHydrate::new(cfg, cwd).expect("must resolve");

    assert_eq!(cfg.endpoint.to_string(), DEFAULT_ENDPOINT);
    assert_eq!(cfg.value, DEFAULT_VALUE);
    assert_eq!(cfg.selector, DEFAULT_SELECTOR);
    assert_eq!(cfg.timeout, None);

    let root = dir.path().canonicalize().expect("must canonicalize");
    assert_eq!(cfg.target, root.join("index.html"));
    assert_eq!(cfg.final_output, root.join("dist").join("index.html"));
}

#[test]
fn discovers_dotted_candidate() {
    let dir = tempdir().expect("must create temp dir");
    fs::write(dir.path().join(".inlay.toml"), "[hydrate]\nselector = \"#slot\"\n")
        .expect("must write config");

    let (cfg, _) = load(Some(dir.path().to_path_buf())).expect("must load");
    assert_eq!(cfg.hydrate.selector.as_deref(), Some("#slot"));
}

#[cfg(not(target_family = "windows"))]
#[test]
fn err_bad_target() {
    let dir = tempdir().expect("must create temp dir");

    let (cfg, cwd) = load(Some(dir.path().to_path_buf())).expect("must load");
    let Err(err) = RtcHydrate::new(cfg, cwd) else {
        panic!("expected config to err");
    };

    let expected_err = format!(
        r#"error getting canonical path to source HTML page "{}/index.html""#,
        dir.path().display()
    );
    assert_eq!(err.to_string(), expected_err);
}

#[test]
fn err_bad_selector() {
    let dir = tempdir().expect("must create temp dir");
    fs::write(dir.path().join("index.html"), "<html></html>").expect("must write page");

    let mut cfg = Configuration::default();
    cfg.hydrate.selector = Some("#!bad".into());

    let Err(err) = RtcHydrate::new(cfg, dir.path().to_path_buf()) else {
        panic!("expected config to err");
    };
    assert!(err.to_string().contains("invalid selector"));
}
