//! Pollutant value object and severity breakpoints

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Breakpoints used for any code not in the table
const FALLBACK_BREAKPOINTS: [f64; 4] = [50.0, 100.0, 150.0, 200.0];

/// The six pollutants reported by the prediction service (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pollutant {
    PM25,
    PM10,
    NO2,
    SO2,
    CO,
    O3,
}

impl Pollutant {
    /// All pollutants in front-page order
    pub const ALL: [Pollutant; 6] = [
        Pollutant::PM25,
        Pollutant::PM10,
        Pollutant::NO2,
        Pollutant::SO2,
        Pollutant::CO,
        Pollutant::O3,
    ];

    /// Wire code, as used in the `pollutants` object
    pub fn code(&self) -> &'static str {
        match self {
            Pollutant::PM25 => "PM25",
            Pollutant::PM10 => "PM10",
            Pollutant::NO2 => "NO2",
            Pollutant::SO2 => "SO2",
            Pollutant::CO => "CO",
            Pollutant::O3 => "O3",
        }
    }

    /// Printed label
    pub fn label(&self) -> &'static str {
        match self {
            Pollutant::PM25 => "PM2.5",
            Pollutant::PM10 => "PM10",
            Pollutant::NO2 => "NO₂",
            Pollutant::SO2 => "SO₂",
            Pollutant::CO => "CO",
            Pollutant::O3 => "O₃",
        }
    }

    /// Upper bounds of GOOD, FAIR, POOR and BAD, in µg/m³
    pub fn breakpoints(&self) -> [f64; 4] {
        match self {
            Pollutant::PM25 => [30.0, 60.0, 90.0, 120.0],
            Pollutant::PM10 => [50.0, 100.0, 250.0, 350.0],
            Pollutant::NO2 => [40.0, 80.0, 180.0, 280.0],
            Pollutant::SO2 => [40.0, 80.0, 380.0, 800.0],
            Pollutant::CO => [4400.0, 9400.0, 12400.0, 15400.0],
            Pollutant::O3 => [50.0, 100.0, 168.0, 208.0],
        }
    }

    /// Classify a concentration of this pollutant
    pub fn severity(&self, value: f64) -> Severity {
        Severity::from_breakpoints(&self.breakpoints(), value)
    }
}

impl std::fmt::Display for Pollutant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Pollutant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pollutant::ALL
            .into_iter()
            .find(|p| p.code() == s)
            .ok_or_else(|| DomainError::UnknownPollutant(s.to_string()))
    }
}

/// Ordered pollutant severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Good,
    Fair,
    Poor,
    Bad,
    Severe,
}

impl Severity {
    const LEVELS: [Severity; 5] = [
        Severity::Good,
        Severity::Fair,
        Severity::Poor,
        Severity::Bad,
        Severity::Severe,
    ];

    /// First breakpoint at or above `value` picks the level; past the last one is SEVERE
    fn from_breakpoints(breakpoints: &[f64; 4], value: f64) -> Self {
        breakpoints
            .iter()
            .position(|limit| value <= *limit)
            .map(|i| Self::LEVELS[i])
            .unwrap_or(Severity::Severe)
    }

    /// Badge text
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Good => "GOOD",
            Severity::Fair => "FAIR",
            Severity::Poor => "POOR",
            Severity::Bad => "BAD",
            Severity::Severe => "SEVERE",
        }
    }

    /// Style class attached to the badge
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Good => "status-good",
            Severity::Fair => "status-moderate",
            Severity::Poor => "status-poor",
            Severity::Bad => "status-bad",
            Severity::Severe => "status-severe",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a concentration by wire code; unknown codes use the fallback table
pub fn classify(code: &str, value: f64) -> Severity {
    match code.parse::<Pollutant>() {
        Ok(pollutant) => pollutant.severity(value),
        Err(_) => Severity::from_breakpoints(&FALLBACK_BREAKPOINTS, value),
    }
}
