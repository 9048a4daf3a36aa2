//! Configuration file loading for daily-breath
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Command-line flags (`--api-url`, `--output`, `--no-animate`, `--no-color`)
//! 2. `DAILY_BREATH_API_URL`, then `REACT_APP_API_URL` (API URL only)
//! 3. `--config <path>` specified file
//! 4. Project root: `./daily-breath.toml` or `./.daily-breath.toml`
//! 5. XDG config: `$XDG_CONFIG_HOME/daily-breath/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigOverrides, ConfigValidationError, DEFAULT_API_URL, Environment, FileApiConfig,
    FileConfig, FileOutputConfig,
};
pub use loader::{ConfigError, ConfigLoader};
