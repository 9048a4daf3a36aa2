//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use breath_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// API location used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("api.url cannot be empty")]
    EmptyApiUrl,

    #[error("api.url must start with http:// or https://, got {0}")]
    InvalidApiUrl(String),

    #[error("api.timeout_seconds cannot be 0")]
    InvalidTimeout,
}

/// Raw API configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL of the prediction service
    pub url: String,
    /// Timeout in seconds for one request
    pub timeout_seconds: u64,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            timeout_seconds: 30,
        }
    }
}

impl FileApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn environment(&self) -> Environment {
        Environment::of(&self.url)
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Play entrance animations
    pub animate: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
            animate: true,
        }
    }
}

/// Complete configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Prediction service settings
    pub api: FileApiConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let url = self.api.url.trim();
        if url.is_empty() {
            return Err(ConfigValidationError::EmptyApiUrl);
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigValidationError::InvalidApiUrl(url.to_string()));
        }

        if self.api.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        Ok(())
    }
}

/// Settings given on the command line, applied above every file and
/// environment source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub api_url: Option<String>,
    pub format: Option<OutputFormat>,
    pub no_animate: bool,
    pub no_color: bool,
}

impl ConfigOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        self.api_url = url;
        self
    }

    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        self.format = format;
        self
    }

    pub fn with_no_animate(mut self, no_animate: bool) -> Self {
        self.no_animate = no_animate;
        self
    }

    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }
}

impl FileConfig {
    /// Apply command-line settings; flags only ever switch features off
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(url) = &overrides.api_url {
            self.api.url = url.clone();
        }
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if overrides.no_animate {
            self.output.animate = false;
        }
        if overrides.no_color {
            self.output.color = false;
        }
    }
}

/// Where the configured API lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Anything on localhost is development
    pub fn of(url: &str) -> Self {
        if url.contains("localhost") {
            Environment::Development
        } else {
            Environment::Production
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[api]
url = "https://aqi.example.org"
timeout_seconds = 10

[output]
format = "json"
color = false
animate = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.url, "https://aqi.example.org");
        assert_eq!(config.api.timeout(), Duration::from_secs(10));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.color);
        assert!(!config.output.animate);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[api]
url = "https://aqi.example.org"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        // Defaults should apply
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.output.format, OutputFormat::Edition);
        assert!(config.output.color);
        assert!(config.output.animate);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.api.url, DEFAULT_API_URL);
        assert_eq!(config.api.environment(), Environment::Development);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = FileConfig::default();
        config.api.url = "  ".into();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyApiUrl));

        config.api.url = "aqi.example.org".into();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidApiUrl("aqi.example.org".into()))
        );

        config.api.url = "https://aqi.example.org".into();
        config.api.timeout_seconds = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let mut config = FileConfig::default();
        config.apply(
            &ConfigOverrides::new()
                .with_api_url(Some("https://flag.example.org".into()))
                .with_format(Some(OutputFormat::Brief))
                .with_no_animate(true)
                .with_no_color(true),
        );
        assert_eq!(config.api.url, "https://flag.example.org");
        assert_eq!(config.output.format, OutputFormat::Brief);
        assert!(!config.output.animate);
        assert!(!config.output.color);
    }

    #[test]
    fn test_absent_overrides_keep_file_values() {
        let mut config: FileConfig = toml::from_str(
            "[api]\nurl = \"https://aqi.example.org\"\n[output]\nformat = \"json\"\nanimate = false",
        )
        .unwrap();
        config.apply(&ConfigOverrides::new());
        assert_eq!(config.api.url, "https://aqi.example.org");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.animate);
        assert!(config.output.color);
    }

    #[test]
    fn test_environment_detection() {
        assert_eq!(Environment::of("http://localhost:5000"), Environment::Development);
        assert_eq!(Environment::of("https://breath.example.org"), Environment::Production);
        assert_eq!(Environment::Production.to_string(), "production");
    }
}
