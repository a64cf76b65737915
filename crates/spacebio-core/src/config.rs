use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use spacebio_api::DEFAULT_BASE_URL;

/// Environment variable that overrides the backend URL
pub const API_URL_ENV: &str = "SPACEBIO_API_URL";

/// Main configuration structure
///
/// Priority: CLI > Env > File > Defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load config from the default location, then apply the environment
    pub fn load() -> crate::Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env(std::env::var(API_URL_ENV).ok());
        Ok(config)
    }

    /// Load config from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| crate::Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Save config to the default location
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Apply an environment-supplied backend URL. Blank values are ignored.
    pub fn apply_env(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
    }

    /// `<config_dir>/spacebio/config.toml`
    pub fn config_path() -> crate::Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| crate::Error::Config("Could not find config directory".into()))?;
        Ok(dir.join("spacebio").join("config.toml"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Research backend base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Give up on a request after this many seconds, 0 disables the timeout
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Request timeout, `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// Path the navigator opens at
    #[serde(default = "default_start_path")]
    pub start_path: String,

    /// Enable mouse support in TUI
    #[serde(default)]
    pub mouse_enabled: bool,
}

fn default_start_path() -> String {
    "/".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_path: default_start_path(),
            mouse_enabled: false,
        }
    }
}
