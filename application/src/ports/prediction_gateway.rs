//! Prediction gateway port
//!
//! Defines the interface for talking to the remote prediction service.

use async_trait::async_trait;
use breath_domain::{PredictRequest, PredictionReport, ServiceHealth};
use thiserror::Error;

/// Message used when the service fails without saying why
pub const GENERIC_FAILURE: &str = "Failed to fetch";

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Non-2xx answer; `message` is the server's `error` field when present
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Request timed out")]
    Timeout,
}

impl GatewayError {
    /// Build an API error from an optional server message
    pub fn api(status: u16, message: Option<String>) -> Self {
        GatewayError::Api {
            status,
            message: message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
        }
    }

    /// HTTP status, when the service answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the service could not be reached
    pub fn is_unreachable(&self) -> bool {
        matches!(self, GatewayError::Connection(_) | GatewayError::Timeout)
    }
}

/// Gateway to the prediction service
///
/// This port defines how the application layer reaches the service.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait PredictionGateway: Send + Sync {
    /// `POST /predict`
    async fn predict(&self, request: &PredictRequest) -> Result<PredictionReport, GatewayError>;

    /// `GET /health`
    async fn health(&self) -> Result<ServiceHealth, GatewayError>;

    /// Base URL requests are sent to, for messages
    fn base_url(&self) -> &str;
}
