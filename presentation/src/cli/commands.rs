//! CLI command definitions

use breath_domain::OutputFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for a prediction report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Full newspaper edition
    Edition,
    /// One-paragraph summary
    Brief,
    /// Raw JSON payload
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Edition => OutputFormat::Edition,
            OutputFormatArg::Brief => OutputFormat::Brief,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for daily-breath
#[derive(Parser, Debug)]
#[command(name = "daily-breath")]
#[command(author, version, about = "The Daily Breath - air quality and health risk edition")]
#[command(long_about = r#"
The Daily Breath asks the air-quality prediction service for today's AQI,
pollutant readings, weather and your personal health risks, and prints
them as a newspaper edition.

Any of --age, --gender or --parent left out is asked for interactively.

Gender codes:  0 = Female, 1 = Male, 2 = Other
Parent codes:  0 = No, 1 = Yes

Settings are taken from (highest priority first):
1. --api-url, -o, --no-animate, --no-color  Command-line flags
2. DAILY_BREATH_API_URL                     API URL from the environment
3. REACT_APP_API_URL                        API URL from the environment
4. --config <path>                          Explicit config file
5. ./daily-breath.toml                      Project-level config
6. ~/.config/daily-breath/config.toml       Global config
7. Built-in defaults                        http://localhost:5000

--no-config skips the three files; flags and environment still apply.

Example:
  daily-breath --age 34 --gender 1 --parent 0
  daily-breath --age 70 --gender female --parent yes -o brief
  daily-breath --api-url https://aqi.example.org --health
"#)]
pub struct Cli {
    /// Reader age (1-120)
    #[arg(short, long, value_name = "YEARS")]
    pub age: Option<String>,

    /// Gender code or name (0/female, 1/male, 2/other)
    #[arg(short, long, value_name = "GENDER")]
    pub gender: Option<String>,

    /// Parent status code or name (0/no, 1/yes)
    #[arg(short, long, value_name = "PARENT")]
    pub parent: Option<String>,

    /// Base URL of the prediction service
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Print the edition at once, without entrance animations
    #[arg(long)]
    pub no_animate: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Check whether the prediction service is up and exit
    #[arg(long)]
    pub health: bool,
}
