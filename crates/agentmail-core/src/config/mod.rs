//! Configuration resolution
//!
//! Resolves API configuration from multiple sources with priority:
//! 1. Command-line flags (passed as parameters)
//! 2. Environment variables
//! 3. Global config (~/.config/agentmail/config.toml)
//! 4. Defaults

mod discovery;
mod types;

pub use discovery::{ConfigError, ConfigOverrides, resolve_api_key, resolve_config};
pub use types::{ApiConfig, Config, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
