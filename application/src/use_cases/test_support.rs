//! Shared fakes for use case tests

use crate::ports::prediction_gateway::{GatewayError, PredictionGateway};
use async_trait::async_trait;
use breath_domain::{PredictRequest, PredictionReport, ServiceHealth};
use std::sync::Mutex;

pub(crate) fn sample_report() -> PredictionReport {
    serde_json::from_value(serde_json::json!({
        "aqi": 163,
        "pollutants": {"PM25": 72.35, "PM10": 140.1, "NO2": 35.2, "SO2": 12.0, "CO": 1100.5, "O3": 61.0},
        "weather": {"temp": 24.3, "humidity": 58, "pressure": 1012, "wind_speed": 3.1},
        "health_risks": {
            "Respiratory_difficulties": {"probability": 0.71, "risk_level": "HIGH"}
        },
        "recommendations": "Everyone should reduce prolonged outdoor exertion."
    }))
    .unwrap()
}

/// Gateway that answers every call the same way and records requests
pub(crate) struct ScriptedGateway {
    report: Option<PredictionReport>,
    failure: Option<(u16, Option<String>)>,
    healthy: bool,
    calls: Mutex<Vec<PredictRequest>>,
}

impl ScriptedGateway {
    pub(crate) fn succeeding(report: PredictionReport) -> Self {
        Self {
            report: Some(report),
            failure: None,
            healthy: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing(status: u16, message: Option<&str>) -> Self {
        Self {
            report: None,
            failure: Some((status, message.map(str::to_string))),
            healthy: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Nothing answers: every call fails to connect
    pub(crate) fn unreachable() -> Self {
        Self {
            report: None,
            failure: None,
            healthy: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<PredictRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PredictionGateway for ScriptedGateway {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictionReport, GatewayError> {
        self.calls.lock().unwrap().push(*request);
        match (&self.report, &self.failure) {
            (Some(report), _) => Ok(report.clone()),
            (None, Some((status, message))) => Err(GatewayError::api(*status, message.clone())),
            (None, None) => Err(GatewayError::Connection("connection refused".into())),
        }
    }

    async fn health(&self) -> Result<ServiceHealth, GatewayError> {
        if self.healthy {
            Ok(ServiceHealth {
                status: "ok".into(),
                message: "Delhi AQI Predictor API is running".into(),
            })
        } else {
            Err(GatewayError::Connection("connection refused".into()))
        }
    }

    fn base_url(&self) -> &str {
        "http://scripted.test"
    }
}
