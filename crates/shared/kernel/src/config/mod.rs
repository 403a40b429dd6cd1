use agk_domain::constants::PORT_ENV;
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `server.toml`) when one exists.
///    If no path is provided, it defaults to `"server"`. The file is optional: the
///    service boots on compiled-in defaults alone.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `AGK__`.
///    Nested structures are accessed using double underscores (e.g., `AGK__SERVER__PORT` maps to `server.port`).
///
/// # Type Parameters
/// * `T`: The target configuration structure. Must implement [`serde::Deserialize`].
///
/// # Arguments
/// * `path`: An optional file path to the configuration source. Defaults to the `server` file in the current working directory.
///
/// # Errors
/// Returns [`ConfigError`] if an existing file cannot be parsed, the environment
/// variables are malformed, or deserialization into `T` fails.
///
/// # Example
/// ```rust
/// use agk_kernel::config::load_config;
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
    let effective_path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix("AGK")
                .separator("__")
                .convert_case(config::Case::Snake), // Env var overrides (e.g., AGK__SERVER__PORT)
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder.build()?.try_deserialize::<T>()?;

    Ok(config)
}

/// Resolves the listen port, honoring the `PORT` environment override.
///
/// Resolution is deliberately permissive: a missing or malformed override
/// falls back to `fallback` rather than failing startup. Malformed values
/// are logged so the operator can see that the override did not take effect.
#[must_use]
pub fn listen_port(fallback: u16) -> u16 {
    let Ok(raw) = std::env::var(PORT_ENV) else {
        return fallback;
    };

    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => port,
        _ => {
            warn!(value = %raw, fallback, "Ignoring invalid {PORT_ENV} override");
            fallback
        }
    }
}
