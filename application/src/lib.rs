//! Application layer for daily-breath
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    prediction_gateway::{GatewayError, PredictionGateway},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::check_service::CheckServiceUseCase;
pub use use_cases::run_prediction::{
    PredictionForm, PredictionOutput, RunPredictionError, RunPredictionUseCase,
};
