//! Shared fixtures for formatter tests

use breath_domain::PredictionReport;

/// Turn off ANSI styling so assertions can match plain text
pub(crate) fn plain() {
    colored::control::set_override(false);
}

pub(crate) fn sample_report() -> PredictionReport {
    serde_json::from_value(serde_json::json!({
        "aqi": 163,
        "pollutants": {"PM25": 72.35, "PM10": 140.1, "NO2": 35.2, "SO2": 12.0, "CO": 1100.5, "O3": 61.0},
        "weather": {"temp": 24.3, "humidity": 58, "pressure": 1012, "wind_speed": 3.1},
        "health_risks": {
            "Respiratory_difficulties": {"probability": 0.71, "risk_level": "HIGH"},
            "Eye_irritation": {"probability": 0.41, "risk_level": "MODERATE"}
        },
        "recommendations": "\nAQI Category: Unhealthy (AQI: 163)\n\nEveryone should reduce prolonged outdoor exertion.\nWear N95 or KN95 mask if you must go outside."
    }))
    .unwrap()
}
