use menkyo_domain::config::{Config, ServiceConfig, StorageConfig, UpstreamMediaConfig};
use serde_json::json;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[test]
fn every_setting_has_its_documented_default() {
    let cfg = Config::default();

    let app = &cfg.app;
    assert_eq!(app.host, "");
    assert_eq!(app.port, 8000);
    assert_eq!(app.cache_max_age, 300);
    assert_eq!(app.log_level, "info");
    assert_eq!(app.log_output, "stdout");
    assert_eq!(app.log_format, "json");
    assert_eq!(app.resource_path_format, "/v2/resources/%s");
    assert_eq!(app.shisan_aes_key, "");

    let reactor = &cfg.reactor;
    assert_eq!(reactor.host, "se-02.adtomafusion.com");
    assert_eq!(reactor.port, 80);
    assert_eq!(reactor.timeout, Duration::from_millis(1000));
    assert_eq!(reactor.media_prefix, "mosaiqio.dev.");

    let datastore = &cfg.datastore;
    assert_eq!(datastore.url, "mem://");
    assert_eq!(datastore.project_name, "mosaiqio-dev");
    assert_eq!(datastore.database, "catalog");
    assert!(datastore.credentials.is_none());

    let hairasete = &cfg.hairasete;
    assert_eq!(hairasete.host, "???");
    assert_eq!(hairasete.port, "???");
    assert_eq!(hairasete.path, "/tokens/validate");
}

#[test]
fn toml_overrides_apply_and_omitted_keys_default() {
    let raw = r#"
        [app]
        port = 9100
        cacheMaxAge = 60
        loglevel = "debug"
        shisanAesKey = "0123456789abcdef"

        [reactor]
        timeout = 2500

        [datastore]
        projectName = "mosaiqio-prod"
    "#;

    let cfg: Config = toml::from_str(raw).expect("config deserialize");
    assert_eq!(cfg.app.port, 9100);
    assert_eq!(cfg.app.cache_max_age, 60);
    assert_eq!(cfg.app.log_level, "debug");
    assert_eq!(cfg.app.shisan_aes_key, "0123456789abcdef");
    // Untouched keys keep their defaults.
    assert_eq!(cfg.app.log_output, "stdout");
    assert_eq!(cfg.reactor.timeout, Duration::from_millis(2500));
    assert_eq!(cfg.reactor.host, "se-02.adtomafusion.com");
    assert_eq!(cfg.datastore.project_name, "mosaiqio-prod");
    assert_eq!(cfg.hairasete.path, "/tokens/validate");
}

#[test]
fn lowercased_keys_are_accepted() {
    // Configuration sources may fold keys to lowercase.
    let raw = r#"
        [app]
        cachemaxage = 42
        resourcepathformat = "/v3/resources/%s"

        [datastore]
        projectname = "folded"
    "#;

    let cfg: Config = toml::from_str(raw).expect("config deserialize");
    assert_eq!(cfg.app.cache_max_age, 42);
    assert_eq!(cfg.app.resource_path_format, "/v3/resources/%s");
    assert_eq!(cfg.datastore.project_name, "folded");
}

#[test]
fn credentials_deserialize_from_json() {
    let raw = json!({
        "datastore": {
            "url": "ws://db.internal:8000",
            "projectName": "mosaiqio-stage",
            "database": "catalog",
            "credentials": { "username": "root", "password": "hunter2" }
        }
    });

    let cfg: Config = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.datastore.url, "ws://db.internal:8000");
    let credentials = cfg.datastore.credentials.expect("credentials present");
    assert_eq!(credentials.username, "root");
    // Debug output must not leak the password.
    assert!(!format!("{credentials:?}").contains("hunter2"));
}

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Buffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

#[test]
fn settings_log_redacts_the_shisan_key() {
    let cfg = Config {
        app: ServiceConfig {
            shisan_aes_key: "very-secret-key-material".to_owned(),
            ..ServiceConfig::default()
        },
        ..Config::default()
    };

    let buffer = Buffer::default();
    let sink = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || sink.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || cfg.log());

    let output = buffer.contents();
    assert!(output.contains("REDACTED"), "placeholder missing from: {output}");
    assert!(!output.contains("very-secret-key-material"), "secret leaked into: {output}");
    // The non-secret settings do get logged.
    assert!(output.contains("se-02.adtomafusion.com"));
    assert!(output.contains("mosaiqio-dev"));
    assert!(output.contains("/tokens/validate"));
}

#[test]
fn debug_output_redacts_the_shisan_key() {
    let app = ServiceConfig {
        shisan_aes_key: "very-secret-key-material".to_owned(),
        ..ServiceConfig::default()
    };
    let rendered = format!("{app:?}");
    assert!(rendered.contains("REDACTED"));
    assert!(!rendered.contains("very-secret-key-material"));
}

#[test]
fn section_defaults_match_the_aggregate() {
    assert_eq!(UpstreamMediaConfig::default().port, 80);
    assert_eq!(StorageConfig::default().url, "mem://");
}
