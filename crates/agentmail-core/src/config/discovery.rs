//! Configuration discovery and resolution

use super::types::Config;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Command-line overrides for configuration
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    /// Value of `--api-key/-k`
    pub api_key: Option<String>,
    /// Value of `--base-url`
    pub base_url: Option<String>,
}

/// Resolve configuration from all sources
///
/// Priority (highest to lowest):
/// 1. Command-line overrides
/// 2. Environment variables (`AGENTMAIL_API_KEY`, `AGENTMAIL_BASE_URL`,
///    `AGENTMAIL_TIMEOUT_SECS`)
/// 3. Global config (~/.config/agentmail/config.toml)
/// 4. Defaults
///
/// A missing API key is not an error here; callers decide when one is
/// required via [`super::ApiConfig::require_api_key`].
pub fn resolve_config(overrides: &ConfigOverrides, home_dir: &Path) -> Result<Config, ConfigError> {
    let mut config = Config::default();

    // 3. Try global config
    let global_config_path = home_dir.join(".config/agentmail/config.toml");
    if global_config_path.exists() {
        match load_config_file(&global_config_path) {
            Ok(file_config) => config = file_config,
            Err(e) => warn!("Failed to parse global config at {global_config_path:?}: {e}"),
        }
    }

    // 2 and 1. Environment, then CLI on top
    let env_key = std::env::var("AGENTMAIL_API_KEY").ok();
    config.api.api_key = resolve_api_key(
        overrides.api_key.as_deref(),
        env_key.as_deref(),
        config.api.api_key.as_deref(),
    );

    let env_base_url = std::env::var("AGENTMAIL_BASE_URL").ok();
    if let Some(base_url) = first_non_empty(&[overrides.base_url.as_deref(), env_base_url.as_deref()]) {
        config.api.base_url = base_url;
    }

    if let Ok(raw) = std::env::var("AGENTMAIL_TIMEOUT_SECS") {
        match raw.trim().parse::<u64>() {
            Ok(secs) => config.api.timeout_secs = secs,
            Err(_) => warn!("Ignoring invalid AGENTMAIL_TIMEOUT_SECS value {raw:?}"),
        }
    }

    Ok(config)
}

/// Pick the API key: explicit flag, then environment, then config file.
///
/// Empty or whitespace-only values count as absent.
pub fn resolve_api_key(
    cli_flag: Option<&str>,
    env_value: Option<&str>,
    file_value: Option<&str>,
) -> Option<String> {
    first_non_empty(&[cli_flag, env_value, file_value])
}

fn first_non_empty(candidates: &[Option<&str>]) -> Option<String> {
    candidates
        .iter()
        .flatten()
        .map(|v| v.trim())
        .find(|v| !v.is_empty())
        .map(str::to_string)
}

/// Load config from a TOML file
fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}
