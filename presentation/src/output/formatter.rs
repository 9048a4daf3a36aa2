//! Output formatter trait

use breath_domain::{OutputFormat, PredictionReport};
use chrono::NaiveDateTime;

/// Trait for formatting prediction reports
pub trait OutputFormatter {
    /// Format the report as issued at `issued_at` (local time)
    fn format(&self, report: &PredictionReport, issued_at: NaiveDateTime) -> String;
}

/// Pick the formatter for a configured output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Edition => Box::new(super::newspaper::NewspaperFormatter),
        OutputFormat::Brief => Box::new(super::brief::BriefFormatter),
        OutputFormat::Json => Box::new(super::json::JsonFormatter),
    }
}
