//! Opt-in retry wrapper around a [`Transport`].
//!
//! The core client never retries. Callers who want resilience compose a
//! [`RetryingTransport`] around their transport and hand it to the builder:
//!
//! ```rust,ignore
//! use analytics_client::{AnalyticsClient, RetryingTransport};
//!
//! let transport = RetryingTransport::new(reqwest::Client::new()).max_retries(5);
//! let client = AnalyticsClient::builder()
//!     .from_config(&config)
//!     .transport(transport)
//!     .build()?;
//! ```
//!
//! Whether an outcome is retried is decided by a [`RetryPolicy`]; the
//! default [`RateLimitPolicy`] retries throttling and server errors.
//!
//! # Invariants
//! - When retries are exhausted the last response or error is returned as-is,
//!   so the request pipeline still classifies it.
//! - Requests with a non-clonable body are sent exactly once.

use async_trait::async_trait;
use reqwest::header::RETRY_AFTER;
use reqwest::{Request, Response, StatusCode};
use std::error::Error as StdError;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use analytics_config::constants::{
    DEFAULT_MAX_RETRIES, DEFAULT_RETRY_MAX_DELAY_SECS, DEFAULT_RETRY_MIN_DELAY_MS,
};

use crate::metrics::MetricsCollector;
use crate::transport::Transport;

/// Outcome of a single attempt, as seen by a [`RetryPolicy`].
#[derive(Debug)]
pub enum Attempt<'a> {
    /// A response was received with this status.
    Status(StatusCode),
    /// The transport failed before a response was received.
    Error(&'a reqwest::Error),
}

/// Decides whether an attempt should be repeated.
pub trait RetryPolicy: Send + Sync + Debug {
    fn should_retry(&self, attempt: &Attempt<'_>) -> bool;
}

/// Retries rate limiting (429) and server errors (5xx except 501).
///
/// Transport failures are retried unless they are caused by exhausting the
/// redirect limit, by a request that could not be built (for example an
/// unsupported scheme), or by an untrusted TLS certificate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RateLimitPolicy;

impl RateLimitPolicy {
    /// Check if an HTTP status code is retryable.
    pub fn is_retryable_status(status: u16) -> bool {
        status == 429 || (status >= 500 && status != 501)
    }

    /// Check if a transport error is retryable.
    pub fn is_retryable_error(err: &reqwest::Error) -> bool {
        if err.is_redirect() || err.is_builder() {
            return false;
        }
        !is_certificate_error(err)
    }
}

impl RetryPolicy for RateLimitPolicy {
    fn should_retry(&self, attempt: &Attempt<'_>) -> bool {
        match attempt {
            Attempt::Status(status) => Self::is_retryable_status(status.as_u16()),
            Attempt::Error(err) => Self::is_retryable_error(err),
        }
    }
}

/// Walk the source chain looking for a certificate verification failure.
///
/// rustls does not surface a typed error through reqwest, so this matches on
/// the rendered messages.
fn is_certificate_error(err: &(dyn StdError + 'static)) -> bool {
    let mut current: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(e) = current {
        let msg = e.to_string().to_lowercase();
        if msg.contains("certificate") || msg.contains("unknownissuer") || msg.contains("unknown issuer")
        {
            return true;
        }
        current = e.source();
    }
    false
}

/// A [`Transport`] that repeats failed attempts with exponential backoff.
#[derive(Debug)]
pub struct RetryingTransport<T> {
    inner: T,
    policy: Arc<dyn RetryPolicy>,
    max_retries: usize,
    min_delay: Duration,
    max_delay: Duration,
    metrics: Option<MetricsCollector>,
}

impl<T: Transport> RetryingTransport<T> {
    /// Wrap `inner` using [`RateLimitPolicy`] and the default limits
    /// (10 retries, 1s initial delay, 30s maximum delay).
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            policy: Arc::new(RateLimitPolicy),
            max_retries: DEFAULT_MAX_RETRIES,
            min_delay: Duration::from_millis(DEFAULT_RETRY_MIN_DELAY_MS),
            max_delay: Duration::from_secs(DEFAULT_RETRY_MAX_DELAY_SECS),
            metrics: None,
        }
    }

    /// Replace the retry policy.
    pub fn with_policy(mut self, policy: impl RetryPolicy + 'static) -> Self {
        self.policy = Arc::new(policy);
        self
    }

    /// Set the maximum number of retries after the first attempt.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the delay before the first retry.
    pub fn min_delay(mut self, delay: Duration) -> Self {
        self.min_delay = delay;
        self
    }

    /// Set the upper bound for any single delay.
    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Record retry attempts with this collector.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Delay before retry number `attempt` (0-based).
    ///
    /// A numeric `Retry-After` header on a 429 or 503 response takes
    /// precedence over the exponential schedule. Both are capped at the
    /// maximum delay.
    pub fn backoff(&self, attempt: usize, response: Option<&Response>) -> Duration {
        if let Some(delay) = response.and_then(retry_after) {
            return delay.min(self.max_delay);
        }
        let factor = 2u32.saturating_pow(attempt.min(31) as u32);
        self.min_delay.saturating_mul(factor).min(self.max_delay)
    }
}

fn retry_after(response: &Response) -> Option<Duration> {
    let status = response.status();
    if status != StatusCode::TOO_MANY_REQUESTS && status != StatusCode::SERVICE_UNAVAILABLE {
        return None;
    }
    response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

#[async_trait]
impl<T: Transport> Transport for RetryingTransport<T> {
    async fn execute(&self, request: Request) -> Result<Response, reqwest::Error> {
        let method = request.method().to_string();
        let path = request.url().path().to_string();
        let mut request = request;
        let mut attempt = 0;

        loop {
            let next = if attempt < self.max_retries {
                request.try_clone()
            } else {
                None
            };
            if next.is_none() && attempt < self.max_retries {
                debug!(%path, "Request cannot be cloned, single attempt only");
            }

            let outcome = self.inner.execute(request).await;
            let retry = match &outcome {
                Ok(response) => self.policy.should_retry(&Attempt::Status(response.status())),
                Err(err) => self.policy.should_retry(&Attempt::Error(err)),
            };

            let next = match next {
                Some(next) if retry => next,
                _ => {
                    if retry {
                        debug!(attempts = attempt + 1, %path, "Retries exhausted");
                    }
                    return outcome;
                }
            };

            let delay = self.backoff(attempt, outcome.as_ref().ok());
            debug!(
                attempt = attempt + 1,
                max_retries = self.max_retries,
                delay_ms = delay.as_millis() as u64,
                status = outcome.as_ref().ok().map(|r| r.status().as_u16()),
                %path,
                "Retrying request"
            );
            drop(outcome);

            if let Some(metrics) = &self.metrics {
                metrics.record_retry(&path, &method, attempt + 1);
            }

            tokio::time::sleep(delay).await;
            request = next;
            attempt += 1;
        }
    }
}
