//! Prediction service adapters

mod http;

pub use http::HttpPredictionGateway;
