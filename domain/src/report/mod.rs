//! Prediction report
//!
//! - [`value_objects::PredictionReport`]: the `/predict` success payload
//! - [`health::HealthRisk`]: per-symptom probability and risk level

pub mod health;
pub mod value_objects;
