//! Output format value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// How a prediction report is put on the page
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full newspaper edition (default)
    #[default]
    Edition,
    /// One-paragraph summary
    Brief,
    /// Raw JSON payload
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "edition" => Ok(OutputFormat::Edition),
            "brief" => Ok(OutputFormat::Brief),
            "json" => Ok(OutputFormat::Json),
            other => Err(DomainError::UnknownOutputFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_edition() {
        assert_eq!(OutputFormat::default(), OutputFormat::Edition);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Brief).unwrap();
        assert_eq!(json, "\"brief\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("EDITION".parse::<OutputFormat>().unwrap(), OutputFormat::Edition);
        assert!("tabloid".parse::<OutputFormat>().is_err());
    }
}
