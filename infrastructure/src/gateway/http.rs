//! HTTP adapter for the prediction service
//!
//! Speaks the service's JSON contract over reqwest:
//!
//! - `POST {base}/predict` with `{age, gender_enc, parent_enc}`
//! - `GET {base}/health`
//!
//! Non-2xx answers carry `{error: string}`; when the body is missing or
//! unreadable the generic message is used instead.

use async_trait::async_trait;
use breath_application::{GatewayError, PredictionGateway};
use breath_domain::{ApiErrorBody, PredictRequest, PredictionReport, ServiceHealth};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, trace};

/// Gateway that reaches the prediction service over HTTP
pub struct HttpPredictionGateway {
    client: Client,
    base_url: String,
}

impl HttpPredictionGateway {
    /// Create a gateway for `base_url` with a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("daily-breath/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn send_error(e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::Timeout
        } else {
            GatewayError::Connection(e.to_string())
        }
    }

    /// Decode a success body, or turn a failure status into an API error
    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
        let status = response.status();
        trace!("Response status {}", status);

        if !status.is_success() {
            let body = response.json::<ApiErrorBody>().await.unwrap_or_default();
            return Err(GatewayError::api(status.as_u16(), body.error));
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout
            } else {
                GatewayError::Decode(e.to_string())
            }
        })
    }
}

#[async_trait]
impl PredictionGateway for HttpPredictionGateway {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictionReport, GatewayError> {
        let url = self.endpoint("predict");
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(Self::send_error)?;

        Self::read_json(response).await
    }

    async fn health(&self) -> Result<ServiceHealth, GatewayError> {
        let url = self.endpoint("health");
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(Self::send_error)?;

        Self::read_json(response).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
