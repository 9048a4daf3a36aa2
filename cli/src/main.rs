//! CLI entrypoint for The Daily Breath
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow};
use breath_application::{
    CheckServiceUseCase, NoProgress, PredictionForm, PredictionGateway, ProgressNotifier,
    RunPredictionError, RunPredictionUseCase,
};
use breath_domain::OutputFormat;
use breath_infrastructure::{ConfigLoader, ConfigOverrides, FileConfig, HttpPredictionGateway};
use breath_presentation::output::formatter::formatter_for;
use breath_presentation::prompt::is_complete;
use breath_presentation::{
    Cli, FormPrompt, Press, PressSpinner, SimpleProgress, breaking_alert, reader_alert,
};
use clap::Parser;
use rustyline::error::ReadlineError;
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Exit status when the form is rejected before anything is sent
const EXIT_INVALID_INPUT: u8 = 2;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting The Daily Breath");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("[Config] API URL: {}", config.api.url);
    info!("[Config] Environment: {}", config.api.environment());

    // === Dependency Injection ===
    let gateway = Arc::new(
        HttpPredictionGateway::new(&config.api.url, config.api.timeout())
            .map_err(|e| anyhow!("Failed to create HTTP client: {e}"))?,
    );

    if cli.health {
        return check_health(gateway).await;
    }

    // Collect the reader form, asking for whatever is missing
    let form = if is_complete(&cli.age, &cli.gender, &cli.parent) {
        PredictionForm::new(
            cli.age.unwrap_or_default(),
            cli.gender.unwrap_or_default(),
            cli.parent.unwrap_or_default(),
        )
    } else {
        match FormPrompt::new()?.complete(cli.age, cli.gender, cli.parent) {
            Ok(form) => form,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                eprintln!("Edition cancelled.");
                return Ok(ExitCode::FAILURE);
            }
            Err(e) => return Err(e.into()),
        }
    };

    let progress: Box<dyn ProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(PressSpinner::new())
    } else {
        Box::new(SimpleProgress)
    };

    let use_case = RunPredictionUseCase::new(Arc::clone(&gateway));
    let output = match use_case.execute_with_progress(&form, progress.as_ref()).await {
        Ok(output) => output,
        Err(RunPredictionError::InvalidInput(e)) => {
            eprintln!("{}", reader_alert(&e));
            return Ok(ExitCode::from(EXIT_INVALID_INPUT));
        }
        Err(RunPredictionError::Gateway(e)) => {
            eprintln!("{}", breaking_alert(&e.to_string(), gateway.base_url()));
            return Ok(ExitCode::FAILURE);
        }
    };

    let issued_at = chrono::Local::now().naive_local();
    debug!("Printing {:?} edition", config.output.format);

    match config.output.format {
        OutputFormat::Edition => {
            let animate = config.output.animate && std::io::stdout().is_terminal();
            let mut press = Press::new(std::io::stdout()).with_animation(animate);
            press.print_edition(&output.report, issued_at).await?;
        }
        format => {
            println!("{}", formatter_for(format).format(&output.report, issued_at));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Load configuration files and apply command-line overrides
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let overrides = ConfigOverrides::new()
        .with_api_url(cli.api_url.clone())
        .with_format(cli.output.map(Into::into))
        .with_no_animate(cli.no_animate)
        .with_no_color(cli.no_color);

    Ok(ConfigLoader::resolve(
        cli.config.as_ref(),
        cli.no_config,
        &overrides,
    )?)
}

async fn check_health(gateway: Arc<HttpPredictionGateway>) -> Result<ExitCode> {
    let base_url = gateway.base_url().to_string();
    match CheckServiceUseCase::new(gateway).execute().await {
        Ok(health) if health.is_ok() => {
            println!("{}: {}", health.status, health.message);
            Ok(ExitCode::SUCCESS)
        }
        Ok(health) => {
            println!("{}: {}", health.status, health.message);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            eprintln!("{}", breaking_alert(&e.to_string(), &base_url));
            Ok(ExitCode::FAILURE)
        }
    }
}
