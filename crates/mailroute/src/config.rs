// File: src/config.rs
// Purpose: Configuration parsing from mailroute.toml plus environment overrides

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// History base path, as provided by the build environment
pub const BASE_URL_ENV: &str = "BASE_URL";
/// Directory holding the view component files
pub const VIEWS_DIR_ENV: &str = "MAILROUTE_VIEWS_DIR";
/// Log level used when `RUST_LOG` is not set
pub const LOG_LEVEL_ENV: &str = "MAILROUTE_LOG";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Application metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_name")]
    pub name: String,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Base path the history mechanism is mounted under (default: "/")
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Whether routes are case-insensitive (default: false)
    #[serde(default = "default_false")]
    pub case_insensitive: bool,

    /// Directory containing view component files (default: "views")
    #[serde(default = "default_views_dir")]
    pub views_dir: String,

    /// Maximum redirect hops per navigation
    #[serde(default = "default_redirect_limit")]
    pub redirect_limit: usize,

    /// Keep the `/admin/...` paths as redirects to their current locations
    #[serde(default = "default_true")]
    pub legacy_redirects: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default values
fn default_name() -> String {
    "mailroute".to_string()
}

fn default_base_path() -> String {
    "/".to_string()
}

fn default_views_dir() -> String {
    "views".to_string()
}

fn default_redirect_limit() -> usize {
    8
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            case_insensitive: false,
            views_dir: default_views_dir(),
            redirect_limit: default_redirect_limit(),
            legacy_redirects: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./mailroute.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("mailroute.toml")
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(base) = present(BASE_URL_ENV) {
            self.routing.base_path = base;
        }
        if let Some(dir) = present(VIEWS_DIR_ENV) {
            self.routing.views_dir = dir;
        }
        if let Some(level) = present(LOG_LEVEL_ENV) {
            self.logging.level = level;
        }

        self
    }
}
