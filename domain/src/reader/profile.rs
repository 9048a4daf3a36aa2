//! Reader profile value object

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Youngest accepted reader age
pub const MIN_AGE: u8 = 1;
/// Oldest accepted reader age
pub const MAX_AGE: u8 = 120;

/// Form validation failures, checked in the order the form is read
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReaderError {
    #[error("Please enter a valid age (1-120)")]
    InvalidAge,

    #[error("Please select your gender")]
    MissingGender,

    #[error("Please indicate parent status")]
    MissingParentStatus,

    #[error("Invalid gender. Must be 0 (Female), 1 (Male), or 2 (Other)")]
    InvalidGender,

    #[error("Invalid parent status. Must be 0 (No) or 1 (Yes)")]
    InvalidParentStatus,
}

impl ReaderError {
    /// Message shown to the reader when submission is blocked
    pub fn alert(&self) -> String {
        format!("ATTENTION READER: {}", self)
    }
}

/// Gender code accepted by the prediction service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Gender {
    pub fn code(&self) -> u8 {
        match self {
            Gender::Female => 0,
            Gender::Male => 1,
            Gender::Other => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Gender::Female),
            1 => Some(Gender::Male),
            2 => Some(Gender::Other),
            _ => None,
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = ReaderError;

    /// Accepts the numeric code or the name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ReaderError::MissingGender);
        }
        match s.to_ascii_lowercase().as_str() {
            "female" | "f" => Ok(Gender::Female),
            "male" | "m" => Ok(Gender::Male),
            "other" | "o" => Ok(Gender::Other),
            code => code
                .parse::<u8>()
                .ok()
                .and_then(Gender::from_code)
                .ok_or(ReaderError::InvalidGender),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

/// Whether the reader is a parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentStatus {
    No,
    Yes,
}

impl ParentStatus {
    pub fn code(&self) -> u8 {
        match self {
            ParentStatus::No => 0,
            ParentStatus::Yes => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ParentStatus::No),
            1 => Some(ParentStatus::Yes),
            _ => None,
        }
    }
}

impl std::str::FromStr for ParentStatus {
    type Err = ReaderError;

    /// Accepts the numeric code or yes/no
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ReaderError::MissingParentStatus);
        }
        match s.to_ascii_lowercase().as_str() {
            "no" | "n" => Ok(ParentStatus::No),
            "yes" | "y" => Ok(ParentStatus::Yes),
            code => code
                .parse::<u8>()
                .ok()
                .and_then(ParentStatus::from_code)
                .ok_or(ReaderError::InvalidParentStatus),
        }
    }
}

impl std::fmt::Display for ParentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ParentStatus::No => "No",
            ParentStatus::Yes => "Yes",
        };
        write!(f, "{}", name)
    }
}

/// A validated reader (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderProfile {
    age: u8,
    gender: Gender,
    parent: ParentStatus,
}

impl ReaderProfile {
    /// Create a profile from already typed values
    pub fn new(age: u8, gender: Gender, parent: ParentStatus) -> Result<Self, ReaderError> {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(ReaderError::InvalidAge);
        }
        Ok(Self {
            age,
            gender,
            parent,
        })
    }

    /// Validate raw form fields
    ///
    /// Fractional ages are truncated after the range check, so `"0.5"` is
    /// rejected and `"30.9"` becomes 30.
    pub fn from_form(age: &str, gender: &str, parent: &str) -> Result<Self, ReaderError> {
        let age = parse_age(age)?;
        let gender = gender.parse::<Gender>()?;
        let parent = parent.parse::<ParentStatus>()?;
        Self::new(age, gender, parent)
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn parent(&self) -> ParentStatus {
        self.parent
    }

    /// Build the `/predict` request body
    pub fn to_request(&self) -> PredictRequest {
        PredictRequest {
            age: self.age,
            gender_enc: self.gender.code(),
            parent_enc: self.parent.code(),
        }
    }
}

fn parse_age(raw: &str) -> Result<u8, ReaderError> {
    let value: f64 = raw.trim().parse().map_err(|_| ReaderError::InvalidAge)?;
    if !value.is_finite() || value < MIN_AGE as f64 || value > MAX_AGE as f64 {
        return Err(ReaderError::InvalidAge);
    }
    Ok(value.trunc() as u8)
}

/// Body of `POST /predict`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub age: u8,
    pub gender_enc: u8,
    pub parent_enc: u8,
}
