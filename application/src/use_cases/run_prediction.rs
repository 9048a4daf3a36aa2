//! Run Prediction use case
//!
//! Validates the reader form, sends exactly one request to the prediction
//! service and hands back the report. Nothing is retried.

use crate::ports::prediction_gateway::{GatewayError, PredictionGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use breath_domain::{PredictionReport, ReaderError, ReaderProfile};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during a prediction
#[derive(Error, Debug)]
pub enum RunPredictionError {
    #[error("{}", .0.alert())]
    InvalidInput(#[from] ReaderError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

impl RunPredictionError {
    /// True when the request never left the client
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, RunPredictionError::InvalidInput(_))
    }
}

/// Raw form fields, exactly as the reader typed them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionForm {
    pub age: String,
    pub gender: String,
    pub parent: String,
}

impl PredictionForm {
    pub fn new(
        age: impl Into<String>,
        gender: impl Into<String>,
        parent: impl Into<String>,
    ) -> Self {
        Self {
            age: age.into(),
            gender: gender.into(),
            parent: parent.into(),
        }
    }

    pub fn validate(&self) -> Result<ReaderProfile, ReaderError> {
        ReaderProfile::from_form(&self.age, &self.gender, &self.parent)
    }
}

/// Output of the RunPrediction use case
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutput {
    pub profile: ReaderProfile,
    pub report: PredictionReport,
}

/// Use case for fetching one prediction
pub struct RunPredictionUseCase<G: PredictionGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: PredictionGateway + 'static> RunPredictionUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        form: &PredictionForm,
    ) -> Result<PredictionOutput, RunPredictionError> {
        self.execute_with_progress(form, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        form: &PredictionForm,
        progress: &dyn ProgressNotifier,
    ) -> Result<PredictionOutput, RunPredictionError> {
        let profile = form.validate().inspect_err(|e| {
            debug!("Form rejected before submission: {}", e);
        })?;
        let request = profile.to_request();

        info!(
            "Requesting prediction from {} (age {}, gender {}, parent {})",
            self.gateway.base_url(),
            request.age,
            request.gender_enc,
            request.parent_enc
        );

        progress.on_request_start(&request);
        let result = self.gateway.predict(&request).await;
        progress.on_request_complete(result.is_ok());

        match result {
            Ok(report) => {
                info!(
                    "Prediction received: AQI {} ({})",
                    report.display_aqi(),
                    report.aqi_info().band
                );
                Ok(PredictionOutput { profile, report })
            }
            Err(e) => {
                warn!("Prediction failed: {}", e);
                Err(e.into())
            }
        }
    }
}
