//! JSON formatter

use crate::output::formatter::OutputFormatter;
use breath_domain::PredictionReport;
use chrono::NaiveDateTime;

/// Prints the report payload as received
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn format(report: &PredictionReport) -> String {
        serde_json::to_string_pretty(report.raw()).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &PredictionReport, _issued_at: NaiveDateTime) -> String {
        Self::format(report)
    }
}
