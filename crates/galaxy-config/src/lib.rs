//! Configuration for the galaxy terminal background.
//!
//! Settings persist to `config.toml` in the platform config directory and
//! can be overridden per run from the command line.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DisplayConfig, LogConfig, default_config_dir, default_data_dir};
pub use error::ConfigError;
