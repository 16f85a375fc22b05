use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix for environment overrides, e.g. `PANTRY__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "PANTRY";

/// File consulted when no path is given. The extension is resolved by the `config` crate.
pub const DEFAULT_CONFIG_FILE: &str = "server";

#[pantry_derive::pantry_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file overlaid with environment variables.
///
/// 1. **Base file**: `path`, or `server.{toml,json,yaml,...}` in the working directory.
///    An explicit path must exist; the default file is optional so a bare binary starts
///    with built-in defaults.
/// 2. **Environment**: variables prefixed with `PANTRY__`, nested keys separated by `__`
///    (`PANTRY__CATALOG__SEED` maps to `catalog.seed`). Values stay strings until the
///    target field asks for a number, so `PANTRY__CATALOG__SEED=2024` is the path `2024`.
///
/// # Errors
/// * The explicit file is missing or unreadable.
/// * The merged values do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use pantry_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, None::<Vec<(String, String)>>)
}

/// [`load_config`] with the environment taken from `env` instead of the process.
/// `None` reads the process environment.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T, E>(path: Option<impl AsRef<Path>>, env: Option<E>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    E: IntoIterator<Item = (String, String)>,
{
    let required = path.is_some();
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let environment = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .source(env.map(|vars| vars.into_iter().collect::<Map<String, String>>()));

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(environment);

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
