//! AQI band value object
//!
//! The printed AQI scale is split into six equal segments. Each band owns
//! one segment and the index is placed inside it by linear interpolation
//! between the band's lower and upper bound.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Width of one band on the printed scale, in percent
pub const SCALE_SEGMENT: f64 = 16.66;

/// Ordered AQI bands (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiBand {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiBand {
    /// All bands, lowest first
    pub const ALL: [AqiBand; 6] = [
        AqiBand::Good,
        AqiBand::Moderate,
        AqiBand::UnhealthyForSensitiveGroups,
        AqiBand::Unhealthy,
        AqiBand::VeryUnhealthy,
        AqiBand::Hazardous,
    ];

    /// Classify an index value. Upper bounds are inclusive.
    pub fn from_aqi(aqi: f64) -> Self {
        if aqi <= 50.0 {
            AqiBand::Good
        } else if aqi <= 100.0 {
            AqiBand::Moderate
        } else if aqi <= 150.0 {
            AqiBand::UnhealthyForSensitiveGroups
        } else if aqi <= 200.0 {
            AqiBand::Unhealthy
        } else if aqi <= 300.0 {
            AqiBand::VeryUnhealthy
        } else {
            AqiBand::Hazardous
        }
    }

    /// Headline printed under the AQI counter
    pub fn category(&self) -> &'static str {
        match self {
            AqiBand::Good => "Good — Safe for all outdoor activities",
            AqiBand::Moderate => "Moderate — Acceptable air quality",
            AqiBand::UnhealthyForSensitiveGroups => {
                "Unhealthy for Sensitive Groups — Exercise caution"
            }
            AqiBand::Unhealthy => "Unhealthy — Health effects possible for all",
            AqiBand::VeryUnhealthy => "Very Unhealthy — Health alert for everyone",
            AqiBand::Hazardous => "HAZARDOUS — Emergency conditions!",
        }
    }

    /// Short name used in the brief edition and in logs
    pub fn short_name(&self) -> &'static str {
        match self {
            AqiBand::Good => "Good",
            AqiBand::Moderate => "Moderate",
            AqiBand::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiBand::Unhealthy => "Unhealthy",
            AqiBand::VeryUnhealthy => "Very Unhealthy",
            AqiBand::Hazardous => "Hazardous",
        }
    }

    /// Print color as a `#rrggbb` string
    pub fn color(&self) -> &'static str {
        match self {
            AqiBand::Good => "#2d5a3d",
            AqiBand::Moderate => "#8b7355",
            AqiBand::UnhealthyForSensitiveGroups => "#b8860b",
            AqiBand::Unhealthy => "#9b1b30",
            AqiBand::VeryUnhealthy => "#6b1320",
            AqiBand::Hazardous => "#2d1b2d",
        }
    }

    /// Print color as an RGB triple
    pub fn rgb(&self) -> (u8, u8, u8) {
        // The table above only holds well-formed colors
        parse_hex_color(self.color()).unwrap_or((0, 0, 0))
    }

    /// Index range covered by this band, `(lower, upper)`
    ///
    /// The hazardous band has no upper bound in classification; for
    /// positioning it saturates 200 points above its lower bound.
    fn span(&self) -> (f64, f64) {
        match self {
            AqiBand::Good => (0.0, 50.0),
            AqiBand::Moderate => (50.0, 100.0),
            AqiBand::UnhealthyForSensitiveGroups => (100.0, 150.0),
            AqiBand::Unhealthy => (150.0, 200.0),
            AqiBand::VeryUnhealthy => (200.0, 300.0),
            AqiBand::Hazardous => (300.0, 500.0),
        }
    }

    /// Zero-based position of this band on the scale
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    /// Place an index value on the printed scale, in percent
    pub fn position(&self, aqi: f64) -> f64 {
        let (lower, upper) = self.span();
        let mut fraction = (aqi - lower) / (upper - lower);
        if *self == AqiBand::Hazardous {
            fraction = fraction.min(1.0);
        }
        let offset = match self {
            // 83.3 is printed as-is on the hazardous segment, not 5 * 16.66
            AqiBand::Hazardous => 83.3,
            other => other.ordinal() as f64 * SCALE_SEGMENT,
        };
        (offset + fraction * SCALE_SEGMENT).max(0.0)
    }
}

impl std::fmt::Display for AqiBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Everything the front page needs to print an AQI value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AqiInfo {
    pub band: AqiBand,
    pub category: &'static str,
    pub color: &'static str,
    /// Indicator position on the scale, in percent
    pub position: f64,
}

impl AqiInfo {
    pub fn from_aqi(aqi: f64) -> Self {
        let band = AqiBand::from_aqi(aqi);
        Self {
            band,
            category: band.category(),
            color: band.color(),
            position: band.position(aqi),
        }
    }
}

/// Parse a `#rrggbb` color into an RGB triple
pub fn parse_hex_color(hex: &str) -> Result<(u8, u8, u8), DomainError> {
    let digits = hex
        .strip_prefix('#')
        .filter(|d| d.len() == 6 && d.is_ascii())
        .ok_or_else(|| DomainError::InvalidColor(hex.to_string()))?;

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| DomainError::InvalidColor(hex.to_string()))
    };

    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
