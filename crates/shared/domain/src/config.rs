use serde::{Deserialize, Deserializer};
use std::fmt;
use std::time::Duration;
use tracing::info;

/// Placeholder logged in place of secret material.
const REDACTED: &str = "[REDACTED]";

/// Top-level configuration shared across all Menkyo components.
///
/// Constructed once at process start and passed by reference to whatever
/// needs it; nothing mutates it afterwards.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub app: ServiceConfig,
    pub reactor: UpstreamMediaConfig,
    pub datastore: StorageConfig,
    pub hairasete: AuthValidationConfig,
}

impl Config {
    /// Logs every resolved setting at `info` level.
    ///
    /// Secret material (the shisan AES key, store passwords) never appears
    /// in the output; the literal `[REDACTED]` is logged in its place.
    pub fn log(&self) {
        self.app.log();
        self.reactor.log();
        self.datastore.log();
        self.hairasete.log();
    }
}

/// Base configuration of the service itself (the `app` section).
///
/// Multi-word keys carry a lowercase alias because some configuration
/// sources fold keys to lowercase.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Host the service binds to (default: empty, all interfaces).
    pub host: String,
    /// Service port (default: `8000`).
    pub port: u16,
    /// Cache max age in seconds (default: `300`, five minutes).
    #[serde(rename = "cacheMaxAge", alias = "cachemaxage")]
    pub cache_max_age: u64,
    /// Log verbosity name (default: `"info"`).
    #[serde(rename = "loglevel")]
    pub log_level: String,
    /// Console log stream, `"stdout"` or `"stderr"` (default: `"stdout"`).
    #[serde(rename = "logoutput")]
    pub log_output: String,
    /// Log format name, `"json"` or plain (default: `"json"`).
    #[serde(rename = "logformat")]
    pub log_format: String,
    /// Format string for resource paths (default: `"/v2/resources/%s"`).
    #[serde(rename = "resourcePathFormat", alias = "resourcepathformat")]
    pub resource_path_format: String,
    /// AES key for shisan payloads (default: empty). Never logged in cleartext.
    #[serde(rename = "shisanAesKey", alias = "shisanaeskey")]
    pub shisan_aes_key: String,
}

impl ServiceConfig {
    fn log(&self) {
        info!(
            host = %self.host,
            port = self.port,
            cache_max_age = self.cache_max_age,
            log_level = %self.log_level,
            log_output = %self.log_output,
            log_format = %self.log_format,
            resource_path_format = %self.resource_path_format,
            shisan_aes_key = REDACTED,
            "Service configuration"
        );
    }
}

// Hand-written so the secret cannot leak through `{:?}` either.
impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("cache_max_age", &self.cache_max_age)
            .field("log_level", &self.log_level)
            .field("log_output", &self.log_output)
            .field("log_format", &self.log_format)
            .field("resource_path_format", &self.resource_path_format)
            .field("shisan_aes_key", &REDACTED)
            .finish()
    }
}

/// Connection settings for the upstream media service (the `reactor` section).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamMediaConfig {
    /// Upstream host (default: `"se-02.adtomafusion.com"`).
    pub host: String,
    /// Upstream port (default: `80`).
    pub port: u16,
    /// Request timeout in integer milliseconds (default: `1000`).
    #[serde(deserialize_with = "duration_from_millis")]
    pub timeout: Duration,
    /// Prefix for media identifiers (default: `"mosaiqio.dev."`).
    #[serde(rename = "mediaPrefix", alias = "mediaprefix")]
    pub media_prefix: String,
}

impl UpstreamMediaConfig {
    fn log(&self) {
        info!(
            host = %self.host,
            port = self.port,
            timeout = ?self.timeout,
            media_prefix = %self.media_prefix,
            "Upstream media configuration"
        );
    }
}

/// Document-store connection settings (the `datastore` section).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Engine URL (default: `"mem://"`).
    pub url: String,
    /// Project name keying the store namespace (default: `"mosaiqio-dev"`).
    #[serde(rename = "projectName", alias = "projectname")]
    pub project_name: String,
    /// Database name inside the project (default: `"catalog"`).
    pub database: String,
    /// Optional root credentials (default: absent, for unauthenticated engines).
    pub credentials: Option<StorageCredentials>,
}

impl StorageConfig {
    fn log(&self) {
        info!(
            url = %self.url,
            project_name = %self.project_name,
            database = %self.database,
            credentials = self.credentials.is_some(),
            "Datastore configuration"
        );
    }
}

/// Root credentials for the document store.
#[derive(Clone, Deserialize)]
pub struct StorageCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for StorageCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageCredentials")
            .field("username", &self.username)
            .field("password", &REDACTED)
            .finish()
    }
}

/// Endpoint of the token-validation service (the `hairasete` section).
/// The upstream endpoint was never provisioned, hence the placeholder defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthValidationConfig {
    /// Validation host (default: `"???"`).
    pub host: String,
    /// Validation port (default: `"???"`).
    pub port: String,
    /// Validation path (default: `"/tokens/validate"`).
    pub path: String,
}

impl AuthValidationConfig {
    fn log(&self) {
        info!(
            host = %self.host,
            port = %self.port,
            path = %self.path,
            "Auth validation configuration"
        );
    }
}

fn duration_from_millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let millis = u64::deserialize(deserializer)?;
    Ok(Duration::from_millis(millis))
}

// --- Default ---

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 8000,
            cache_max_age: 300,
            log_level: "info".to_owned(),
            log_output: "stdout".to_owned(),
            log_format: "json".to_owned(),
            resource_path_format: "/v2/resources/%s".to_owned(),
            shisan_aes_key: String::new(),
        }
    }
}

impl Default for UpstreamMediaConfig {
    fn default() -> Self {
        Self {
            host: "se-02.adtomafusion.com".to_owned(),
            port: 80,
            timeout: Duration::from_millis(1000),
            media_prefix: "mosaiqio.dev.".to_owned(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            url: "mem://".to_owned(),
            project_name: "mosaiqio-dev".to_owned(),
            database: "catalog".to_owned(),
            credentials: None,
        }
    }
}

impl Default for AuthValidationConfig {
    fn default() -> Self {
        Self {
            host: "???".to_owned(),
            port: "???".to_owned(),
            path: "/tokens/validate".to_owned(),
        }
    }
}
