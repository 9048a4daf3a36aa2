//! Progress reporting for prediction requests

use breath_application::ProgressNotifier;
use breath_domain::PredictRequest;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while the edition goes to press
pub struct PressSpinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl PressSpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for PressSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for PressSpinner {
    fn on_request_start(&self, _request: &PredictRequest) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Going to press...");
        pb.set_message("gathering today's air");
        pb.enable_steady_tick(Duration::from_millis(80));

        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_request_complete(&self, _success: bool) {
        if let Some(pb) = self.bar.lock().ok().and_then(|mut slot| slot.take()) {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_request_start(&self, request: &PredictRequest) {
        eprintln!(
            "{} {} (age {})",
            "->".cyan(),
            "Going to press...".bold(),
            request.age
        );
    }

    fn on_request_complete(&self, success: bool) {
        if success {
            eprintln!("  {} edition received", "v".green());
        } else {
            eprintln!("  {} press stopped", "x".red());
        }
    }
}
