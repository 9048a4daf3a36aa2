//! Progress notification port
//!
//! Defines the interface for reporting progress while a prediction is
//! in flight.

use breath_domain::PredictRequest;

/// Callback for progress updates during a prediction
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called right before the request is sent
    fn on_request_start(&self, request: &PredictRequest);

    /// Called when the request has finished, successfully or not
    fn on_request_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_request_start(&self, _request: &PredictRequest) {}
    fn on_request_complete(&self, _success: bool) {}
}
