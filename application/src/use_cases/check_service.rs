//! Check Service use case
//!
//! Asks the prediction service whether it is up.

use crate::ports::prediction_gateway::{GatewayError, PredictionGateway};
use breath_domain::ServiceHealth;
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for probing `GET /health`
pub struct CheckServiceUseCase<G: PredictionGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: PredictionGateway + 'static> CheckServiceUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self) -> Result<ServiceHealth, GatewayError> {
        info!("Checking service health at {}", self.gateway.base_url());
        let health = self.gateway.health().await.inspect_err(|e| {
            warn!("Health check failed: {}", e);
        })?;
        if !health.is_ok() {
            warn!("Service reported status {:?}", health.status);
        }
        Ok(health)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{ScriptedGateway, sample_report};

    #[tokio::test]
    async fn test_healthy_service() {
        let gateway = Arc::new(ScriptedGateway::succeeding(sample_report()));
        let health = CheckServiceUseCase::new(gateway).execute().await.unwrap();
        assert!(health.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        let gateway = Arc::new(ScriptedGateway::unreachable());
        let err = CheckServiceUseCase::new(gateway).execute().await.unwrap_err();
        assert!(err.is_unreachable());
        assert_eq!(err.status(), None);
    }
}
