//! Newspaper edition formatter
//!
//! Each section is a separate function so the press can print them one at
//! a time with entrance delays; [`NewspaperFormatter::format`] glues them
//! together for a static print.

use crate::output::formatter::OutputFormatter;
use breath_domain::{
    AqiBand, AqiInfo, Edition, HealthRisk, Pollutant, PredictionReport, RiskLevel, Severity,
    Weather, masthead_date, report_time,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use colored::{ColoredString, Colorize};

/// Width of the printed page
pub const PAGE_WIDTH: usize = 60;

/// Formats a report as a newspaper edition
pub struct NewspaperFormatter;

impl NewspaperFormatter {
    pub fn masthead(date: NaiveDate) -> String {
        let rule = "=".repeat(PAGE_WIDTH);
        format!(
            "{}\n{}\n{}\n{}\n",
            rule,
            format!("{:^width$}", Edition::NAME.to_uppercase(), width = PAGE_WIDTH).bold(),
            format!("{:^width$}", masthead_date(date), width = PAGE_WIDTH).dimmed(),
            rule
        )
    }

    /// Headline counter line; redrawn in place while the counter runs
    pub fn aqi_headline(value: i64, band: AqiBand) -> String {
        format!(
            "{} {}",
            "AIR QUALITY INDEX:".bold(),
            band_colored(&value.to_string(), band).bold()
        )
    }

    pub fn category(info: &AqiInfo) -> String {
        format!("{}\n", band_colored(info.category, info.band).italic())
    }

    /// Six colored segments with an indicator under the computed position
    pub fn scale(info: &AqiInfo) -> String {
        let segment_width = PAGE_WIDTH / AqiBand::ALL.len();
        let bar: String = AqiBand::ALL
            .iter()
            .map(|band| band_colored(&"█".repeat(segment_width), *band).to_string())
            .collect();

        let column = indicator_column(info.position, segment_width * AqiBand::ALL.len());
        let indicator = format!("{}{}", " ".repeat(column), "▲".bold());

        format!("{}\n{}\n", bar, indicator)
    }

    pub fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.bold(), "-".repeat(PAGE_WIDTH))
    }

    pub fn pollutant_row(pollutant: Pollutant, value: f64) -> String {
        let severity = pollutant.severity(value);
        format!(
            "  {:<6} {:>10} µg/m³   {}\n",
            pollutant.label(),
            value,
            severity_badge(severity)
        )
    }

    pub fn weather(weather: &Weather) -> String {
        format!(
            "  Temperature {}°C  |  Humidity {}%  |  Pressure {} hPa  |  Wind {} m/s\n",
            weather.temp, weather.humidity, weather.pressure, weather.wind_speed
        )
    }

    pub fn risk_article(symptom: &str, risk: &HealthRisk) -> String {
        format!(
            "  {} {}\n      {}   {}\n",
            "▪".bold(),
            HealthRisk::headline(symptom).bold(),
            risk.percent_label(),
            risk_badge(risk.risk_level)
        )
    }

    pub fn no_risks() -> String {
        format!("  {}\n", "No health risks reported.".dimmed())
    }

    pub fn recommendations(text: &str) -> String {
        let mut output = String::new();
        for line in text.trim().lines() {
            output.push_str(&format!("  {}\n", line.trim_end()));
        }
        output
    }

    pub fn footer(time: NaiveTime) -> String {
        format!(
            "\n{} {}\n{}\n",
            "Report filed at".dimmed(),
            report_time(time),
            "=".repeat(PAGE_WIDTH)
        )
    }

    /// The whole edition, with the counter already at its final value
    pub fn format(report: &PredictionReport, issued_at: NaiveDateTime) -> String {
        let info = report.aqi_info();
        let mut output = String::new();

        output.push_str(&Self::masthead(issued_at.date()));
        output.push('\n');
        output.push_str(&Self::aqi_headline(report.display_aqi(), info.band));
        output.push('\n');
        output.push_str(&Self::category(&info));
        output.push_str(&Self::scale(&info));

        output.push_str(&Self::section_header("POLLUTANT READINGS"));
        for (pollutant, value) in report.pollutants.readings() {
            output.push_str(&Self::pollutant_row(pollutant, value));
        }

        output.push_str(&Self::section_header("WEATHER"));
        output.push_str(&Self::weather(&report.weather));

        output.push_str(&Self::section_header("HEALTH RISKS"));
        if report.health_risks.is_empty() {
            output.push_str(&Self::no_risks());
        }
        for (symptom, risk) in &report.health_risks {
            output.push_str(&Self::risk_article(symptom, risk));
        }

        output.push_str(&Self::section_header("RECOMMENDATIONS"));
        output.push_str(&Self::recommendations(&report.recommendations));

        output.push_str(&Self::footer(issued_at.time()));
        output
    }
}

impl OutputFormatter for NewspaperFormatter {
    fn format(&self, report: &PredictionReport, issued_at: NaiveDateTime) -> String {
        Self::format(report, issued_at)
    }
}

/// Column of the scale indicator for a position in percent
fn indicator_column(position: f64, width: usize) -> usize {
    let last = width.saturating_sub(1) as f64;
    ((position / 100.0) * last).round().clamp(0.0, last) as usize
}

fn band_colored(text: &str, band: AqiBand) -> ColoredString {
    let (r, g, b) = band.rgb();
    text.truecolor(r, g, b)
}

fn severity_badge(severity: Severity) -> ColoredString {
    let badge = format!("[{}]", severity.as_str());
    match severity {
        Severity::Good => badge.green(),
        Severity::Fair => badge.yellow(),
        Severity::Poor => badge.truecolor(0xb8, 0x86, 0x0b),
        Severity::Bad => badge.red(),
        Severity::Severe => badge.red().bold(),
    }
}

fn risk_badge(level: RiskLevel) -> ColoredString {
    let badge = format!("[{}]", level.as_str());
    match level {
        RiskLevel::Low => badge.green(),
        RiskLevel::Moderate => badge.yellow(),
        RiskLevel::High => badge.red().bold(),
    }
}
