use menkyo_domain::config::Config;
use menkyo_kernel::config::{load_config, load_config_or_default};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn file_overrides_are_layered_over_defaults() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("menkyo.toml");
    fs::write(
        &path,
        r#"
            [app]
            port = 9000
            loglevel = "warn"

            [reactor]
            timeout = 250

            [datastore]
            projectName = "mosaiqio-test"
        "#,
    )
    .expect("write config file");

    let cfg: Config = load_config(Some(&path)).expect("load config");
    assert_eq!(cfg.app.port, 9000);
    assert_eq!(cfg.app.log_level, "warn");
    assert_eq!(cfg.reactor.timeout, Duration::from_millis(250));
    assert_eq!(cfg.datastore.project_name, "mosaiqio-test");
    // Keys the file does not mention fall back to their defaults.
    assert_eq!(cfg.app.log_format, "json");
    assert_eq!(cfg.hairasete.path, "/tokens/validate");
}

#[test]
fn missing_file_yields_pure_defaults() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("does-not-exist.toml");

    let cfg: Config = load_config(Some(&path)).expect("load config without a file");
    assert_eq!(cfg.app.port, 8000);
    assert_eq!(cfg.datastore.project_name, "mosaiqio-dev");
}

#[test]
fn malformed_file_fails_load_config() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("menkyo.toml");
    fs::write(&path, "[app\nport = ").expect("write broken file");

    assert!(load_config::<Config>(Some(&path)).is_err());
}

#[test]
fn load_or_default_degrades_instead_of_failing() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("menkyo.toml");
    fs::write(&path, "[app\nport = ").expect("write broken file");

    let cfg: Config = load_config_or_default(Some(&path));
    assert_eq!(cfg.app.port, 8000);
    assert_eq!(cfg.app.log_level, "info");
}
