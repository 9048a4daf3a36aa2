//! Brief formatter: the edition in one paragraph

use crate::output::formatter::OutputFormatter;
use breath_domain::{HealthRisk, PredictionReport, report_time};
use chrono::NaiveDateTime;
use colored::Colorize;

pub struct BriefFormatter;

impl BriefFormatter {
    pub fn format(report: &PredictionReport, issued_at: NaiveDateTime) -> String {
        let info = report.aqi_info();
        let (pollutant, value, severity) = report.pollutants.worst();

        let mut output = format!(
            "{} AQI {} ({}). Worst pollutant: {} at {} µg/m³ [{}].",
            format!("[{}]", report_time(issued_at.time())).dimmed(),
            report.display_aqi().to_string().bold(),
            info.band.short_name(),
            pollutant.label(),
            value,
            severity
        );

        if let Some((symptom, risk)) = report.highest_risk() {
            output.push_str(&format!(
                " Highest risk: {} ({}, {}).",
                HealthRisk::headline(symptom),
                risk.percent_label(),
                risk.risk_level
            ));
        }

        output
    }
}

impl OutputFormatter for BriefFormatter {
    fn format(&self, report: &PredictionReport, issued_at: NaiveDateTime) -> String {
        Self::format(report, issued_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{plain, sample_report};
    use chrono::NaiveDate;

    #[test]
    fn test_brief_summary() {
        plain();
        let issued_at = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();

        let brief = BriefFormatter::format(&sample_report(), issued_at);

        assert_eq!(
            brief,
            "[09:05 AM] AQI 163 (Unhealthy). Worst pollutant: PM2.5 at 72.35 µg/m³ [POOR]. \
             Highest risk: Respiratory difficulties (71% probability, HIGH)."
        );
    }

    #[test]
    fn test_brief_without_risks() {
        plain();
        let mut report = sample_report();
        report.health_risks.clear();
        let issued_at = NaiveDate::from_ymd_opt(2026, 1, 2)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        let brief = BriefFormatter::format(&report, issued_at);
        assert!(!brief.contains("Highest risk"));
    }
}
