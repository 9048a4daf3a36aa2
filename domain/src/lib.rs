//! Domain layer for daily-breath
//!
//! This crate contains the value objects and pure lookup tables behind
//! The Daily Breath. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Air quality
//!
//! - **AQI bands**: six ordered buckets mapping an index value to a
//!   category headline, a print color and a position on the printed scale
//! - **Pollutant severity**: per-pollutant breakpoint tables classifying a
//!   concentration into one of five ordered levels
//!
//! ## Reader
//!
//! The three form inputs (age, gender code, parent-status code) and their
//! validation into a [`ReaderProfile`].
//!
//! ## Report
//!
//! The prediction payload returned by the remote service, plus the
//! dateline and animation math used to put it on the page.

pub mod air_quality;
pub mod config;
pub mod core;
pub mod edition;
pub mod reader;
pub mod report;

// Re-export commonly used types
pub use air_quality::{
    index::{AqiBand, AqiInfo, SCALE_SEGMENT},
    pollutant::{Pollutant, Severity, classify},
};
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use edition::{
    animation::{Stagger, Typewriter, ease_out_cubic},
    dateline::{Edition, masthead_date, report_time},
};
pub use reader::profile::{Gender, ParentStatus, PredictRequest, ReaderError, ReaderProfile};
pub use report::{
    health::{HealthRisk, RiskLevel},
    value_objects::{ApiErrorBody, PollutantReadings, PredictionReport, ServiceHealth, Weather},
};
