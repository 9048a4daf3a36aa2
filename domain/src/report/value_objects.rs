//! Prediction payload value objects
//!
//! These mirror the JSON returned by the prediction service. The payload
//! is read-only and lives for one render.

use super::health::HealthRisk;
use crate::air_quality::{
    index::AqiInfo,
    pollutant::{Pollutant, Severity},
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Concentrations of the six reported pollutants
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PollutantReadings {
    #[serde(rename = "PM25")]
    pub pm25: f64,
    #[serde(rename = "PM10")]
    pub pm10: f64,
    #[serde(rename = "NO2")]
    pub no2: f64,
    #[serde(rename = "SO2")]
    pub so2: f64,
    #[serde(rename = "CO")]
    pub co: f64,
    #[serde(rename = "O3")]
    pub o3: f64,
}

impl PollutantReadings {
    pub fn get(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::PM25 => self.pm25,
            Pollutant::PM10 => self.pm10,
            Pollutant::NO2 => self.no2,
            Pollutant::SO2 => self.so2,
            Pollutant::CO => self.co,
            Pollutant::O3 => self.o3,
        }
    }

    /// Readings in front-page order
    pub fn readings(&self) -> impl Iterator<Item = (Pollutant, f64)> + '_ {
        Pollutant::ALL.into_iter().map(|p| (p, self.get(p)))
    }

    /// The pollutant with the highest severity; earlier rows win ties
    pub fn worst(&self) -> (Pollutant, f64, Severity) {
        self.readings()
            .map(|(p, value)| (p, value, p.severity(value)))
            .fold(None, |worst: Option<(Pollutant, f64, Severity)>, row| match worst {
                Some(w) if w.2 >= row.2 => Some(w),
                _ => Some(row),
            })
            .unwrap_or((Pollutant::PM25, self.pm25, Pollutant::PM25.severity(self.pm25)))
    }
}

/// Weather box figures
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Weather {
    /// Degrees Celsius
    pub temp: f64,
    /// Percent
    pub humidity: f64,
    /// hPa
    pub pressure: f64,
    /// m/s
    pub wind_speed: f64,
}

/// Successful `/predict` response
///
/// Decoding keeps the untouched body next to the typed fields, so the
/// payload can be echoed with its original numbers and extra keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionReport {
    pub aqi: f64,
    pub pollutants: PollutantReadings,
    pub weather: Weather,
    /// Symptom name to predicted risk, in key order
    pub health_risks: BTreeMap<String, HealthRisk>,
    pub recommendations: String,
    #[serde(skip)]
    raw: Value,
}

#[derive(Deserialize)]
struct ReportFields {
    aqi: f64,
    pollutants: PollutantReadings,
    weather: Weather,
    health_risks: BTreeMap<String, HealthRisk>,
    recommendations: String,
}

impl<'de> Deserialize<'de> for PredictionReport {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        let fields = ReportFields::deserialize(&raw).map_err(serde::de::Error::custom)?;
        Ok(Self {
            aqi: fields.aqi,
            pollutants: fields.pollutants,
            weather: fields.weather,
            health_risks: fields.health_risks,
            recommendations: fields.recommendations,
            raw,
        })
    }
}

impl PredictionReport {
    /// The body exactly as the service sent it
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn aqi_info(&self) -> AqiInfo {
        AqiInfo::from_aqi(self.aqi)
    }

    /// AQI as printed by the headline counter
    pub fn display_aqi(&self) -> i64 {
        self.aqi.round() as i64
    }

    /// Symptom with the highest probability, if any were reported
    pub fn highest_risk(&self) -> Option<(&str, &HealthRisk)> {
        self.health_risks
            .iter()
            .max_by(|a, b| a.1.probability.total_cmp(&b.1.probability))
            .map(|(symptom, risk)| (symptom.as_str(), risk))
    }
}

/// Failure body of any endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl ServiceHealth {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::air_quality::index::AqiBand;
    use crate::report::health::RiskLevel;

    const SAMPLE: &str = r#"{
        "aqi": 163,
        "pollutants": {"PM25": 72.35, "PM10": 140.1, "NO2": 35.2, "SO2": 12.0, "CO": 1100.5, "O3": 61.0},
        "weather": {"temp": 24.3, "humidity": 58, "pressure": 1012, "wind_speed": 3.1},
        "health_risks": {
            "Respiratory_difficulties": {"probability": 0.71, "risk_level": "HIGH"},
            "Eye_irritation": {"probability": 0.41, "risk_level": "MODERATE"}
        },
        "recommendations": "Wear N95 or KN95 mask if you must go outside."
    }"#;

    #[test]
    fn test_decode_sample_payload() {
        let report: PredictionReport = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(report.display_aqi(), 163);
        assert_eq!(report.aqi_info().band, AqiBand::Unhealthy);
        assert_eq!(report.pollutants.get(Pollutant::PM10), 140.1);
        assert_eq!(report.weather.humidity, 58.0);
        assert_eq!(report.health_risks.len(), 2);
    }

    #[test]
    fn test_health_risks_are_key_ordered() {
        let report: PredictionReport = serde_json::from_str(SAMPLE).unwrap();
        let keys: Vec<_> = report.health_risks.keys().cloned().collect();
        assert_eq!(keys, vec!["Eye_irritation", "Respiratory_difficulties"]);
    }

    #[test]
    fn test_readings_in_display_order() {
        let report: PredictionReport = serde_json::from_str(SAMPLE).unwrap();
        let codes: Vec<_> = report.pollutants.readings().map(|(p, _)| p.code()).collect();
        assert_eq!(codes, vec!["PM25", "PM10", "NO2", "SO2", "CO", "O3"]);
    }

    #[test]
    fn test_worst_pollutant() {
        let report: PredictionReport = serde_json::from_str(SAMPLE).unwrap();
        let (pollutant, value, severity) = report.pollutants.worst();
        // PM2.5 at 72.35 and PM10 at 140.1 are both POOR; the first row wins
        assert_eq!(pollutant, Pollutant::PM25);
        assert_eq!(value, 72.35);
        assert_eq!(severity, Severity::Poor);
    }

    #[test]
    fn test_highest_risk() {
        let report: PredictionReport = serde_json::from_str(SAMPLE).unwrap();
        let (symptom, risk) = report.highest_risk().unwrap();
        assert_eq!(symptom, "Respiratory_difficulties");
        assert_eq!(risk.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_raw_body_is_kept_verbatim() {
        let body = r#"{"aqi": 163, "pollutants": {"PM25": 72.35, "PM10": 140.1, "NO2": 35.2, "SO2": 12.0, "CO": 1100.5, "O3": 61.0},
            "weather": {"temp": 24.3, "humidity": 58, "pressure": 1012, "wind_speed": 3.1},
            "health_risks": {}, "recommendations": "", "city": "Delhi"}"#;
        let report: PredictionReport = serde_json::from_str(body).unwrap();
        assert_eq!(report.aqi, 163.0);
        assert_eq!(report.raw()["aqi"], serde_json::json!(163));
        assert!(report.raw()["aqi"].is_u64());
        assert_eq!(report.raw()["weather"]["humidity"], serde_json::json!(58));
        assert_eq!(report.raw()["city"], "Delhi");
    }

    #[test]
    fn test_risk_without_level_is_bucketed() {
        let body = SAMPLE.replace(r#", "risk_level": "HIGH""#, "");
        let report: PredictionReport = serde_json::from_str(&body).unwrap();
        let (_, risk) = report.highest_risk().unwrap();
        assert_eq!(risk.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_error_body_tolerates_missing_field() {
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.error, None);
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error": "Invalid age. Must be between 1 and 120"}"#).unwrap();
        assert_eq!(
            body.error.as_deref(),
            Some("Invalid age. Must be between 1 and 120")
        );
    }

    #[test]
    fn test_service_health() {
        let health: ServiceHealth = serde_json::from_str(
            r#"{"status": "ok", "message": "Delhi AQI Predictor API is running"}"#,
        )
        .unwrap();
        assert!(health.is_ok());
    }
}
