//! Configuration loaded from `~/.config/party-site/config.toml`.
//!
//! A missing file means defaults. An unreadable or invalid file also means
//! defaults, plus a warning for the caller to surface.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::SITE_ID;
use crate::counter::Easing;
use crate::state::Theme;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL the `/api/...` endpoints are resolved against.
    pub api_base_url: String,
    pub theme: Theme,
    pub counter: CounterConfig,
    pub toast: ToastConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000".to_string(),
            theme: Theme::Light,
            counter: CounterConfig::default(),
            toast: ToastConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub tick_ms: u64,
    pub easing: Easing,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            tick_ms: 16,
            easing: Easing::EaseOutCubic,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub duration_ms: u64,
    pub limit: usize,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: 5000,
            limit: 3,
        }
    }
}

pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Load from the default location.
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

pub fn load_config_from(path: &Path) -> ConfigResult {
    debug!(path = %path.display(), "loading config");

    if !path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read config");
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {e}")),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            warn!(path = %path.display(), error = %e, "invalid config");
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {e}")),
            }
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(SITE_ID).join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_gives_defaults_silently() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_from(&dir.path().join("config.toml"));
        assert_eq!(result.config, Config::default());
        assert!(result.warning.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let file = write_config(
            r#"
api_base_url = "https://upp.example.org"
theme = "dark"

[counter]
easing = "linear"
"#,
        );
        let result = load_config_from(file.path());
        assert!(result.warning.is_none());
        assert_eq!(result.config.api_base_url, "https://upp.example.org");
        assert_eq!(result.config.theme, Theme::Dark);
        assert_eq!(result.config.counter.easing, Easing::Linear);
        assert_eq!(result.config.counter.tick_ms, 16);
        assert_eq!(result.config.toast, ToastConfig::default());
    }

    #[test]
    fn invalid_file_warns_and_falls_back() {
        let file = write_config("theme = \"sepia\"\n");
        let result = load_config_from(file.path());
        assert_eq!(result.config, Config::default());
        assert!(result.warning.unwrap().starts_with("Invalid config"));
    }
}
