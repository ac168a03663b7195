// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use unrot::config;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Point the client at a local backend
//! config.server_url = Some("http://localhost:8000".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Unrot";

/// Backend the client talks to when no override is configured.
pub const DEFAULT_SERVER_URL: &str = "https://unrot.onrender.com";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub language: Option<String>,
    /// Backend base URL override.
    #[serde(default)]
    pub server_url: Option<String>,
}

impl Config {
    /// The backend base URL to use, falling back to the public server.
    #[must_use]
    pub fn server_url(&self) -> &str {
        self.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            language: Some("fr".to_string()),
            server_url: Some("http://localhost:8000".to_string()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not [valid toml").expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("load should not fail");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn missing_server_url_falls_back_to_default() {
        let config = Config::default();
        assert_eq!(config.server_url(), DEFAULT_SERVER_URL);
    }

    #[test]
    fn configured_server_url_wins() {
        let config = Config {
            language: None,
            server_url: Some("http://127.0.0.1:9999".to_string()),
        };
        assert_eq!(config.server_url(), "http://127.0.0.1:9999");
    }
}
