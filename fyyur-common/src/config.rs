//! Bootstrap configuration loading
//!
//! Settings are resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (`FYYUR_DATABASE`, `FYYUR_BIND`, `FYYUR_LOG_LEVEL`)
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing TOML file is not an error: the server starts on defaults and
//! logs a warning. A TOML file that exists but does not parse is an error.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const ENV_DATABASE: &str = "FYYUR_DATABASE";
pub const ENV_BIND: &str = "FYYUR_BIND";
pub const ENV_LOG_LEVEL: &str = "FYYUR_LOG_LEVEL";

/// Flask's development server port, kept so existing bookmarks still work
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Contents of the TOML bootstrap file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Path to SQLite database file
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Socket address the HTTP server binds to
    #[serde(default)]
    pub bind_addr: Option<String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging section of the TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default)]
    pub level: Option<String>,

    /// Log file path (logs to stderr if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl TomlConfig {
    /// Parse TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read the TOML file at `path`; a missing file yields the empty config
    pub async fn load(path: &Path) -> Result<Self> {
        match tokio::fs::read_to_string(path).await {
            Ok(text) => {
                let config = Self::from_toml_str(&text)?;
                info!("Loaded TOML configuration from {}", path.display());
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    "Config file {} not found, using defaults",
                    path.display()
                );
                Ok(Self::default())
            }
            Err(e) => Err(Error::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

/// Command-line overrides (highest priority tier)
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub database_path: Option<PathBuf>,
    pub bind_addr: Option<String>,
    pub log_level: Option<String>,
}

/// Fully resolved bootstrap configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_path: PathBuf,
    pub bind_addr: String,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load the TOML file (explicit path or platform default) and resolve
    pub async fn load(overrides: ConfigOverrides) -> Result<Self> {
        let toml_config = match overrides.config_path.clone().or_else(default_config_path) {
            Some(path) => TomlConfig::load(&path).await?,
            None => TomlConfig::default(),
        };
        Ok(Self::resolve(overrides, toml_config))
    }

    /// Merge the tiers: CLI > environment > TOML > compiled default
    pub fn resolve(overrides: ConfigOverrides, toml_config: TomlConfig) -> Self {
        let database_path = overrides
            .database_path
            .or_else(|| env_value(ENV_DATABASE).map(PathBuf::from))
            .or(toml_config.database_path)
            .unwrap_or_else(default_database_path);

        let bind_addr = overrides
            .bind_addr
            .or_else(|| env_value(ENV_BIND))
            .or(toml_config.bind_addr)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let log_level = overrides
            .log_level
            .or_else(|| env_value(ENV_LOG_LEVEL))
            .or(toml_config.logging.level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self {
            database_path,
            bind_addr,
            log_level,
            log_file: toml_config.logging.file,
        }
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// `~/.config/fyyur/config.toml` (platform equivalent elsewhere)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("fyyur").join("config.toml"))
}

/// `~/.local/share/fyyur/fyyur.db` (platform equivalent elsewhere)
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("fyyur"))
        .unwrap_or_else(|| PathBuf::from("./fyyur_data"))
        .join("fyyur.db")
}
