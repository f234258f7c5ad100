//! Configuration management module
//!
//! Handles loading and validation of the service endpoint and logging
//! preferences.

use crate::{JobMatchError, Result, APP_NAME, BASE_URL_ENV, CONFIG_FILE, DEFAULT_API_BASE_URL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration loaded from `jobmatch.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Matching service settings
    #[serde(default)]
    pub api: ApiSettings,
    /// Log output settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Matching service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL every operation path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Write logs to a file instead of stderr (stderr would corrupt the TUI)
    #[serde(default = "default_to_file")]
    pub to_file: bool,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_to_file() -> bool {
    true
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: default_to_file(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the standard config file location, apply
    /// the base URL overrides and validate the result
    pub fn load(cli_base_url: Option<String>) -> Result<Self> {
        let config_path = Self::config_file_path()?;
        Self::load_from(&config_path)?.resolve(std::env::var(BASE_URL_ENV).ok(), cli_base_url)
    }

    /// Apply the environment then the command-line base URL, validating
    /// only the final value
    pub fn resolve(
        mut self,
        env_base_url: Option<String>,
        cli_base_url: Option<String>,
    ) -> Result<Self> {
        self.apply_env_override(env_base_url);
        if let Some(url) = cli_base_url {
            self = self.with_base_url(url);
        }
        self.validate()?;
        Ok(self)
    }

    /// Load configuration from a specific file, or defaults if it is missing
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            JobMatchError::Config(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            JobMatchError::Config(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(config)
    }

    /// Replace the base URL with a non-empty environment value
    pub fn apply_env_override(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
    }

    /// Set the base URL (command-line override)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.api.base_url).map_err(|e| {
            JobMatchError::Config(format!("Invalid base URL {}: {}", self.api.base_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(JobMatchError::Config(format!(
                "Base URL must use http or https: {}",
                self.api.base_url
            )));
        }

        if self.logging.level.trim().is_empty() {
            return Err(JobMatchError::Config(
                "Log level must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/jobmatch/jobmatch.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            JobMatchError::Config("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Directory log files are written to
    /// Uses $DATA_LOCAL_HOME/jobmatch/logs
    pub fn logs_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_local_dir().ok_or_else(|| {
            JobMatchError::Config("Unable to determine data directory".to_string())
        })?;

        Ok(data_dir.join(APP_NAME).join("logs"))
    }
}
