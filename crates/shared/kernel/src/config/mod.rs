use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[menkyo_derive::menkyo_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// File stem searched in the working directory when no path is given.
pub const DEFAULT_CONFIG_STEM: &str = "menkyo";

const ENV_PREFIX: &str = "MENKYO";

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `menkyo.toml`). If no path is provided,
///    it defaults to `"menkyo"`. The file is optional; every setting has a default, so a
///    missing file simply contributes nothing.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with
///    `MENKYO__`. Nested keys are accessed using double underscores
///    (e.g., `MENKYO__DATASTORE__URL` maps to `datastore.url`).
///
/// # Type Parameters
/// * `T`: The target configuration structure. Must implement [`serde::Deserialize`].
///
/// # Arguments
/// * `path`: An optional file path to the configuration source. Defaults to the `menkyo`
///   file in the current working directory.
///
/// # Errors
/// This function will return an error if:
/// * The environment overlay or an existing configuration file is malformed.
/// * The merged content does not match the structure of type `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_STEM), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))  // every key has a default
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Loads configuration like [`load_config`], but never fails.
///
/// Any resolution problem degrades to `T::default()` with a warning. The
/// warning goes straight to stderr because the tracing subscriber is not
/// installed yet at configuration-load time.
#[allow(clippy::print_stderr)]
pub fn load_config_or_default<T>(path: Option<impl AsRef<Path>>) -> T
where
    T: DeserializeOwned + Default,
{
    load_config(path).unwrap_or_else(|err| {
        eprintln!("Problem reading configuration, using defaults: {err}");
        T::default()
    })
}
