//! Configuration file loader with multi-source merging

use super::file_config::{ConfigOverrides, ConfigValidationError, FileConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;
use thiserror::Error;

const PROJECT_FILES: [&str; 2] = ["daily-breath.toml", ".daily-breath.toml"];

/// Environment variables that override `api.url`, lowest priority first
const API_URL_VARS: [&str; 2] = ["REACT_APP_API_URL", "DAILY_BREATH_API_URL"];

/// Failure to produce a usable configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigValidationError),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest, `--api-url` is applied by [`Self::resolve`]):
    /// 1. `DAILY_BREATH_API_URL`, then `REACT_APP_API_URL`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./daily-breath.toml` or `./.daily-breath.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/daily-breath/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Load defaults plus environment overrides (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, Box<figment::Error>> {
        Self::with_env(Self::defaults()).extract().map_err(Box::new)
    }

    /// Load every source, apply command-line overrides on top and validate
    ///
    /// With `skip_files` only defaults and environment variables are read.
    /// The result honours the full priority order, `--api-url` first.
    pub fn resolve(
        config_path: Option<&PathBuf>,
        skip_files: bool,
        overrides: &ConfigOverrides,
    ) -> Result<FileConfig, ConfigError> {
        let mut config = if skip_files {
            Self::load_defaults()?
        } else {
            Self::load(config_path)?
        };
        config.apply(overrides);
        config.validate()?;
        Ok(config)
    }

    fn defaults() -> Figment {
        Figment::new().merge(Serialized::defaults(FileConfig::default()))
    }

    fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Self::defaults();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        Self::with_env(figment)
    }

    fn with_env(mut figment: Figment) -> Figment {
        for var in API_URL_VARS {
            figment = figment.merge(Env::raw().only(&[var]).map(|_| "api.url".into()));
        }
        figment
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/daily-breath/config.toml if set,
    /// otherwise falls back to ~/.config/daily-breath/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("daily-breath").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Flag:    --api-url, --output, --no-animate, --no-color");

        for var in API_URL_VARS.iter().rev() {
            let marker = if std::env::var_os(var).is_some() {
                "[SET  ]"
            } else {
                "[     ]"
            };
            println!("  {} Env:     {}", marker, var);
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./daily-breath.toml or ./.daily-breath.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
