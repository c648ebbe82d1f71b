//! Configuration loading and validation for tripdesk.
//!
//! Loads configuration from `~/.tripdesk/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tool names known to the built-in registry.
pub const WEATHER_LOOKUP: &str = "weather_lookup";
pub const BUDGET_CALCULATOR: &str = "budget_calculator";

/// The root configuration structure.
///
/// Maps directly to `~/.tripdesk/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default log filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Which tools are registered
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Weather lookup settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Budget calculator settings
    #[serde(default)]
    pub budget: BudgetConfig,
}

fn default_log_level() -> String {
    "info".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_enabled_tools")]
    pub enabled: Vec<String>,
}

fn default_enabled_tools() -> Vec<String> {
    vec![WEATHER_LOOKUP.into(), BUDGET_CALCULATOR.into()]
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled_tools(),
        }
    }
}

impl ToolsConfig {
    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.iter().any(|n| n == name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// strftime pattern for the date embedded in forecasts
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    "%Y-%m-%d".into()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// Label used when an entry has no leading word
    #[serde(default = "default_placeholder_label")]
    pub placeholder_label: String,
}

fn default_placeholder_label() -> String {
    "item".into()
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            placeholder_label: default_placeholder_label(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.tripdesk/config.toml).
    ///
    /// Environment overrides:
    /// - `TRIPDESK_LOG_LEVEL`
    /// - `TRIPDESK_DATE_FORMAT`
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from(&Self::config_path())?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply `TRIPDESK_*` overrides read through `lookup`.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup("TRIPDESK_LOG_LEVEL") {
            self.log_level = level;
        }

        if let Some(format) = lookup("TRIPDESK_DATE_FORMAT") {
            self.weather.date_format = format;
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".tripdesk")
    }

    /// Get the configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.tools.enabled.is_empty() {
            return Err(ConfigError::ValidationError(
                "tools.enabled must name at least one tool".into(),
            ));
        }

        if self.weather.date_format.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "weather.date_format must not be empty".into(),
            ));
        }

        if self.budget.placeholder_label.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "budget.placeholder_label must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a default config TOML string (for `onboard` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            tools: ToolsConfig::default(),
            weather: WeatherConfig::default(),
            budget: BudgetConfig::default(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigError> for tripdesk_core::Error {
    fn from(err: ConfigError) -> Self {
        tripdesk_core::Error::Config {
            message: err.to_string(),
        }
    }
}
