// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences to a `settings.toml` file.
//!
//! The configuration is organized into sections:
//! - `[general]` - theme mode
//! - `[api]` - detection service base address
//!
//! The file location can be customized with the `--config-dir` launch
//! flag; otherwise it lives under the platform config directory.

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PhishX";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// Theme preference (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Detection service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ApiConfig {
    /// Base address of the PhishX backend, e.g. `http://localhost:5000`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Resolves the config file path, honoring an explicit directory override.
pub fn resolve_path(dir_override: Option<&str>) -> Option<PathBuf> {
    match dir_override {
        Some(dir) => Some(Path::new(dir).join(CONFIG_FILE)),
        None => default_config_path(),
    }
}

/// Loads the configuration from `path`, falling back to defaults when the
/// file is missing or unreadable. Load failures are logged, not surfaced:
/// a corrupt preferences file must never block startup.
pub fn load_or_default(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    match load_from_path(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not load settings");
            Config::default()
        }
    }
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
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Dark,
            },
            api: ApiConfig {
                base_url: Some("http://10.0.0.2:5000".to_string()),
            },
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
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_or_default_tolerates_a_missing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        let loaded = load_or_default(Some(&config_path));
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
        assert!(loaded.api.base_url.is_none());
    }

    #[test]
    fn resolve_path_honors_directory_override() {
        let resolved = resolve_path(Some("/tmp/phishx-test")).expect("path");
        assert!(resolved.ends_with("settings.toml"));
        assert!(resolved.starts_with("/tmp/phishx-test"));
    }
}
