//! Client composition for the CLI.
//!
//! Responsibilities:
//! - Build the HTTP client with the configured timeout.
//! - Wrap it in a `RetryingTransport` unless retries are disabled.
//! - Hand the transport and the loaded `Config` to `AnalyticsClient::builder()`.
//!
//! Invariants:
//! - `--no-retry` or `max_retries == 0` sends every request exactly once.

use analytics_client::{AnalyticsClient, RetryingTransport};
use analytics_config::Config;
use anyhow::{Context, Result};

/// Build an `AnalyticsClient` for one CLI invocation.
pub fn build_client(config: &Config, no_retry: bool) -> Result<AnalyticsClient> {
    let http = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let builder = AnalyticsClient::builder().from_config(config);
    let builder = if no_retry || config.max_retries == 0 {
        tracing::debug!("Retries disabled");
        builder.http_client(http)
    } else {
        builder.transport(RetryingTransport::new(http).max_retries(config.max_retries))
    };

    Ok(builder.build()?)
}
