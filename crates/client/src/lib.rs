//! Adobe Analytics 2.0 REST API client.
//!
//! This crate provides a typed, async client for the Analytics 2.0 API:
//! calculated metrics, report suite collections, date ranges, dimensions,
//! metrics, segments, users and ranked reports. Every request is scoped to
//! a company and carries the Adobe IMS credentials as headers.
//!
//! The client itself never retries. Wrap the HTTP client in a
//! [`RetryingTransport`] to retry throttled (429) and transient server
//! (5xx except 501) responses with exponential backoff.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod models;
pub mod retry;
mod serde_helpers;
pub mod transport;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::Credentials;
pub use client::AnalyticsClient;
pub use client::builder::AnalyticsClientBuilder;
pub use client::{
    CalculatedMetricsService, CollectionsService, DateRangesService, DimensionsService,
    MetricsService, ReportsService, SegmentsService, UsersService,
};
pub use endpoints::{QueryParams, ToQuery};
pub use error::{ClientError, ConfigurationError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use retry::{Attempt, RateLimitPolicy, RetryPolicy, RetryingTransport};
pub use transport::Transport;
