//! Configuration types

use crate::error::ApiError;
use serde::Deserialize;
use std::fmt;

/// Production API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.agentmail.to/v0";

/// Request timeout when nothing else is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Complete configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// API connection settings
    #[serde(default)]
    pub api: ApiConfig,
}

/// API connection settings: the `[api]` table of the config file
#[derive(Clone, Deserialize)]
pub struct ApiConfig {
    /// Bearer token for the AgentMail API
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL including the version prefix
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// The resolved API key, or [`ApiError::MissingApiKey`]
    pub fn require_api_key(&self) -> Result<&str, ApiError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ApiError::MissingApiKey)
    }
}

// Keeps the key out of debug logs.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
