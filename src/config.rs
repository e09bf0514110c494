//! Configuration management for the forward-notifier daemon.
//!
//! The configuration lives in a single TOML file. It is loaded once at
//! startup and passed by reference into the components that need it; nothing
//! re-reads the file at request time.

use crate::errors::{AppError, AppResult};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Attribution label used when no device name is configured.
pub const DEFAULT_DEVICE_NAME: &str = "Apple Device";

fn default_port() -> u16 {
    8000
}

fn default_probe_url() -> String {
    "https://example.com".to_string()
}

fn default_max_attempts() -> u32 {
    10
}

fn default_retry_delay_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub connectivity: ConnectivityConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Display attribution for the device the notifications originate from.
///
/// The name is display-only; an empty value falls back to
/// [`DEFAULT_DEVICE_NAME`] at dispatch time.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeviceConfig {
    #[serde(default)]
    pub name: String,
}

impl DeviceConfig {
    /// The attribution label to show on toasts.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            DEFAULT_DEVICE_NAME
        } else {
            &self.name
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig { port: default_port() }
    }
}

/// Startup connectivity probe settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectivityConfig {
    #[serde(default = "default_probe_url")]
    pub probe_url: String,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        ConnectivityConfig {
            probe_url: default_probe_url(),
            max_attempts: default_max_attempts(),
            retry_delay_secs: default_retry_delay_secs(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional log file; when set, logs also go to a daily-rolling file.
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig { level: default_log_level(), path: None }
    }
}

/// Configuration manager.
///
/// Loads the configuration from an explicit path when one is given, and from
/// the per-user config directory otherwise. A missing file is created with
/// serialized defaults so the device name has an obvious place to be filled
/// in.
#[derive(Debug)]
pub struct ConfigManager {
    config_path: PathBuf,
    config: Config,
}

impl ConfigManager {
    /// Load (or create with defaults) the configuration.
    pub fn new(config_path: Option<PathBuf>) -> AppResult<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => Self::global_config_path()?,
        };
        let config = Self::load_or_create(&config_path)?;
        Ok(ConfigManager { config_path, config })
    }

    /// Write a fresh default configuration, replacing any existing file when
    /// `force` is set.
    pub fn init(config_path: Option<PathBuf>, force: bool) -> AppResult<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => Self::global_config_path()?,
        };

        if config_path.exists() && !force {
            let config = Self::load_or_create(&config_path)?;
            return Ok(ConfigManager { config_path, config });
        }

        let config = Config::default();
        Self::write_config(&config_path, &config)?;
        Ok(ConfigManager { config_path, config })
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Path of the backing configuration file.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    fn global_config_path() -> AppResult<PathBuf> {
        let base_dirs = BaseDirs::new()
            .ok_or_else(|| AppError::config("could not determine user config directory"))?;
        Ok(base_dirs
            .config_dir()
            .join("forward-notifier")
            .join("config.toml"))
    }

    fn load_or_create(path: &Path) -> AppResult<Config> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| AppError::io_with_source(path, "read config", e))?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = Config::default();
            Self::write_config(path, &config)?;
            Ok(config)
        }
    }

    fn write_config(path: &Path, config: &Config) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::io_with_source(parent, "create config directory", e))?;
        }
        let content = toml::to_string_pretty(config)?;
        fs::write(path, content)
            .map_err(|e| AppError::io_with_source(path, "write config", e))?;
        Ok(())
    }
}
