//! Home directory resolution
//!
//! The only thing read from the home directory is the optional config file
//! at `~/.config/agentmail/config.toml`. Tests and sandboxed deployments
//! point `AGENTMAIL_HOME` somewhere else so that a developer's real config
//! never leaks in.
//!
//! # Precedence
//!
//! 1. `AGENTMAIL_HOME` environment variable (if set and non-empty)
//! 2. `dirs::home_dir()` platform default

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the home directory used for config discovery
///
/// # Errors
///
/// Returns an error if `AGENTMAIL_HOME` is unset and the platform home
/// directory cannot be determined.
pub fn get_home_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("AGENTMAIL_HOME") {
        let trimmed = home.trim();
        if !trimmed.is_empty() {
            return Ok(PathBuf::from(trimmed));
        }
    }

    dirs::home_dir().context("Could not determine home directory")
}
