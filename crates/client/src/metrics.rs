//! Request metrics for Analytics API calls.
//!
//! Records through the `metrics` facade. Nothing is exported from here;
//! install a recorder in the host application to collect the values.
//!
//! # Invariants
//! - Labels are always drawn from `endpoint`, `method`, `status`, `error_category`, `attempt`.
//! - Recording never fails and never affects the request outcome.
//! - Zero-cost when no metrics recorder is installed.

use crate::error::ClientError;
use metrics::Label;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "analytics_api_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "analytics_api_requests_total";

/// Metric name for retry counter.
pub const METRIC_RETRIES_TOTAL: &str = "analytics_api_retries_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "analytics_api_errors_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transport-level errors (connection refused, DNS, TLS, timeout)
    Transport,
    /// HTTP 4xx responses
    Http4xx,
    /// HTTP 5xx responses
    Http5xx,
    /// Successful responses whose body could not be decoded
    Decode,
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Decode => "decode",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Transport(_) => ErrorCategory::Transport,
            ClientError::UnexpectedStatus { status, .. } if (400..500).contains(status) => {
                ErrorCategory::Http4xx
            }
            ClientError::UnexpectedStatus { status, .. } if (500..600).contains(status) => {
                ErrorCategory::Http5xx
            }
            ClientError::Decode { .. } => ErrorCategory::Decode,
            _ => ErrorCategory::Unknown,
        }
    }
}

fn base_labels(endpoint: &str, method: &str) -> Vec<Label> {
    vec![
        Label::new("endpoint", endpoint.to_string()),
        Label::new("method", method.to_string()),
    ]
}

/// Metrics collector for Analytics API calls.
///
/// ```rust,ignore
/// use analytics_client::MetricsCollector;
///
/// let collector = MetricsCollector::new();
/// collector.record_request_duration("segments", "GET", Duration::from_millis(150), Some(200));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of an API request.
    ///
    /// `status` is `None` when the transport failed before a response arrived.
    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let mut labels = base_labels(endpoint, method);
        labels.push(Label::new(
            "status",
            status.map_or("error".to_string(), |s| s.to_string()),
        ));
        metrics::histogram!(METRIC_REQUEST_DURATION, labels).record(duration.as_secs_f64());
    }

    /// Record a request sent through the pipeline.
    pub fn record_request(&self, endpoint: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL, base_labels(endpoint, method)).increment(1);
    }

    /// Record a retry attempt. `attempt` is 1-based.
    pub fn record_retry(&self, endpoint: &str, method: &str, attempt: usize) {
        if !self.enabled {
            return;
        }

        let mut labels = base_labels(endpoint, method);
        labels.push(Label::new("attempt", attempt.to_string()));
        metrics::counter!(METRIC_RETRIES_TOTAL, labels).increment(1);
    }

    pub fn record_error(&self, endpoint: &str, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        let mut labels = base_labels(endpoint, method);
        labels.push(Label::new("error_category", category.as_str()));
        metrics::counter!(METRIC_ERRORS_TOTAL, labels).increment(1);
    }

    /// Categorize and record a pipeline error.
    pub fn record_client_error(&self, endpoint: &str, method: &str, error: &ClientError) {
        self.record_error(endpoint, method, ErrorCategory::from(error));
    }
}
