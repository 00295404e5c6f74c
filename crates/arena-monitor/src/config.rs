//! Application configuration.

use crate::error::{AppError, AppResult};
use arena_dashboard::DashboardConfig;
use arena_registry::RegistryConfig;
use arena_telemetry::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "ARENA_CONFIG";

/// Config file used when neither `--config` nor `ARENA_CONFIG` is given.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging.
    #[serde(default)]
    pub telemetry: LoggingConfig,
    /// Dashboard view limits.
    #[serde(default)]
    pub dashboard: DashboardConfig,
    /// Registry overlay on top of the built-in models.
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Where a config path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` or `ARENA_CONFIG`: the file must exist.
    Explicit(String),
    /// Fallback path: optional.
    Default(String),
}

impl ConfigSource {
    /// Pick the config path: CLI arg > env var > default.
    pub fn select(cli: Option<&str>, env: Option<&str>) -> Self {
        match cli.or(env).filter(|p| !p.trim().is_empty()) {
            Some(path) => Self::Explicit(path.to_string()),
            None => Self::Default(DEFAULT_CONFIG_PATH.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Explicit(path) | Self::Default(path) => path,
        }
    }
}

impl AppConfig {
    /// Load configuration, honoring `--config` and `ARENA_CONFIG`.
    pub fn load(cli_path: Option<&str>) -> AppResult<Self> {
        let env_path = std::env::var(CONFIG_ENV).ok();
        Self::load_from(&ConfigSource::select(cli_path, env_path.as_deref()))
    }

    /// Load from a selected source; a missing default file yields defaults.
    pub fn load_from(source: &ConfigSource) -> AppResult<Self> {
        match source {
            ConfigSource::Explicit(path) => Self::from_file(path),
            ConfigSource::Default(path) if Path::new(path).exists() => Self::from_file(path),
            ConfigSource::Default(path) => {
                tracing::warn!(path = %path, "Config file not found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config {path}: {e}")))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }
}
