//! Configuration structs with defaults and TOML persistence.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use galaxy_core::FieldConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.toml";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Particle field tuning.
    pub field: FieldConfig,
    /// Terminal presentation.
    pub display: DisplayConfig,
    /// Logging.
    pub log: LogConfig,
}

/// How the field maps onto the terminal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the key help line at the bottom of the screen.
    pub show_help: bool,
    /// Virtual pixels per terminal column.
    pub cell_width: f32,
    /// Virtual pixels per terminal row.
    pub cell_height: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_help: true,
            cell_width: 8.0,
            cell_height: 16.0,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, e.g. "info" or "galaxy_field=debug". `RUST_LOG` wins.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from("", "", "galaxy").ok_or(ConfigError::NoConfigDir)
}

/// Platform config directory, e.g. `~/.config/galaxy`.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    Ok(project_dirs()?.config_dir().to_path_buf())
}

/// Platform data directory, where the log file lives.
pub fn default_data_dir() -> Result<PathBuf, ConfigError> {
    Ok(project_dirs()?.data_dir().to_path_buf())
}

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::load(&config_path)?;
            info!(path = %config_path.display(), "loaded config");
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            info!(path = %config_path.display(), "created default config");
            Ok(config)
        }
    }

    /// Parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        toml::from_str(&contents).map_err(ConfigError::ParseError)
    }

    /// Save config to the given directory as `config.toml`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let serialized = toml::to_string_pretty(self).map_err(ConfigError::SerializeError)?;
        std::fs::write(config_dir.join(CONFIG_FILE), serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}
