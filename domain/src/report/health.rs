//! Health risk entries of a prediction report

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize};

/// Probability below which a symptom is LOW risk
const MODERATE_FROM: f64 = 0.33;
/// Probability below which a symptom is MODERATE risk
const HIGH_FROM: f64 = 0.67;

/// Enumerated risk level attached to each symptom
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Bucket a probability the same way the prediction service does
    pub fn from_probability(probability: f64) -> Self {
        if probability < MODERATE_FROM {
            RiskLevel::Low
        } else if probability < HIGH_FROM {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::High => "HIGH",
        }
    }

    /// Lower-case style class, e.g. `risk-high`
    pub fn class(&self) -> String {
        format!("risk-{}", self.as_str().to_ascii_lowercase())
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LOW" => Ok(RiskLevel::Low),
            "MODERATE" => Ok(RiskLevel::Moderate),
            "HIGH" => Ok(RiskLevel::High),
            _ => Err(DomainError::UnknownRiskLevel(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for RiskLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Predicted risk of one symptom
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireHealthRisk")]
pub struct HealthRisk {
    /// Probability in `0..=1`
    pub probability: f64,
    pub risk_level: RiskLevel,
}

/// Risk entry as sent; the level may be left out
#[derive(Deserialize)]
struct WireHealthRisk {
    probability: f64,
    #[serde(default)]
    risk_level: Option<RiskLevel>,
}

impl From<WireHealthRisk> for HealthRisk {
    fn from(wire: WireHealthRisk) -> Self {
        Self {
            probability: wire.probability,
            risk_level: wire
                .risk_level
                .unwrap_or_else(|| RiskLevel::from_probability(wire.probability)),
        }
    }
}

impl HealthRisk {
    pub fn new(probability: f64) -> Self {
        Self {
            probability,
            risk_level: RiskLevel::from_probability(probability),
        }
    }

    /// Whole-number percentage, e.g. `42`
    pub fn percent(&self) -> i64 {
        (self.probability * 100.0).round() as i64
    }

    /// e.g. `42% probability`
    pub fn percent_label(&self) -> String {
        format!("{}% probability", self.percent())
    }

    /// Article headline for a symptom key, e.g. `shortness of breath`
    pub fn headline(symptom: &str) -> String {
        symptom.replace('_', " ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_from_probability() {
        assert_eq!(RiskLevel::from_probability(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.329), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.33), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_probability(0.669), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_probability(0.67), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(1.0), RiskLevel::High);
    }

    #[test]
    fn test_risk_level_wire_format() {
        let level: RiskLevel = serde_json::from_str("\"MODERATE\"").unwrap();
        assert_eq!(level, RiskLevel::Moderate);
        let level: RiskLevel = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(level, RiskLevel::High);
        assert!(serde_json::from_str::<RiskLevel>("\"EXTREME\"").is_err());
        assert_eq!(serde_json::to_string(&RiskLevel::Low).unwrap(), "\"LOW\"");
    }

    #[test]
    fn test_missing_level_falls_back_to_probability() {
        let risk: HealthRisk = serde_json::from_str(r#"{"probability": 0.7}"#).unwrap();
        assert_eq!(risk.risk_level, RiskLevel::High);
        let risk: HealthRisk =
            serde_json::from_str(r#"{"probability": 0.5, "risk_level": null}"#).unwrap();
        assert_eq!(risk.risk_level, RiskLevel::Moderate);
    }

    #[test]
    fn test_sent_level_wins_over_probability() {
        let risk: HealthRisk =
            serde_json::from_str(r#"{"probability": 0.9, "risk_level": "LOW"}"#).unwrap();
        assert_eq!(risk.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_percent_label_rounds() {
        assert_eq!(HealthRisk::new(0.424).percent_label(), "42% probability");
        assert_eq!(HealthRisk::new(0.676).percent_label(), "68% probability");
        assert_eq!(HealthRisk::new(0.0).percent_label(), "0% probability");
    }

    #[test]
    fn test_headline_replaces_underscores() {
        assert_eq!(
            HealthRisk::headline("Respiratory_difficulties"),
            "Respiratory difficulties"
        );
        assert_eq!(HealthRisk::headline("cough"), "cough");
    }

    #[test]
    fn test_class() {
        assert_eq!(RiskLevel::High.class(), "risk-high");
    }
}
