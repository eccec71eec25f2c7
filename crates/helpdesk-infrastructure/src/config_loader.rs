//! Configuration loading.
//!
//! Configuration lives at `~/.config/helpdesk/config.toml`. A missing file
//! yields the defaults; a malformed file is an error rather than a silent
//! fallback.

use helpdesk_core::config::Config;
use helpdesk_core::error::{HelpdeskError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the platform config file path (`<config dir>/helpdesk/config.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| HelpdeskError::config("failed to get config directory"))?;
    Ok(config_dir.join("helpdesk").join("config.toml"))
}

/// Loads the configuration from the default location.
pub fn load_config() -> Result<Config> {
    load_config_from(&config_file_path()?)
}

/// Loads the configuration from a specific path. Missing file means defaults.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(?path, "no config file, using defaults");
        return Ok(Config::default());
    }

    let text = fs::read_to_string(path)?;
    let config = toml::from_str(&text)?;
    Ok(config)
}
