//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown pollutant code: {0}")]
    UnknownPollutant(String),

    #[error("Unknown risk level: {0}")]
    UnknownRiskLevel(String),

    #[error("Unknown output format: {0}")]
    UnknownOutputFormat(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

impl DomainError {
    /// Check if this error came from parsing a wire or user supplied code
    pub fn is_unknown_code(&self) -> bool {
        matches!(
            self,
            DomainError::UnknownPollutant(_)
                | DomainError::UnknownRiskLevel(_)
                | DomainError::UnknownOutputFormat(_)
        )
    }
}
