//! Client builder for constructing [`AnalyticsClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating the base URL and the four credentials, in a fixed order
//! - Normalizing the base URL (removing trailing slashes)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by the resource services)
//! - Timeouts and retries (properties of the [`Transport`] supplied by the caller)
//!
//! # Invariants
//! - Validation happens entirely inside [`AnalyticsClientBuilder::build`]; no
//!   request can ever be sent with an invalid configuration
//! - The first failing check wins: URL form, scheme, host, client id, access
//!   token, org id, company id

use std::sync::Arc;

use reqwest::Url;
use secrecy::SecretString;

use analytics_config::Config;
use analytics_config::constants::DEFAULT_ENDPOINT;

use crate::auth::Credentials;
use crate::client::AnalyticsClient;
use crate::error::{ConfigurationError, Result};
use crate::metrics::MetricsCollector;
use crate::transport::Transport;

/// Builder for creating a new [`AnalyticsClient`].
///
/// ```rust,ignore
/// use analytics_client::AnalyticsClient;
/// use secrecy::SecretString;
///
/// let client = AnalyticsClient::builder()
///     .base_url("https://analytics.adobe.io/api")
///     .client_id("my-client-id")
///     .org_id("my-org@AdobeOrg")
///     .access_token(SecretString::from("token"))
///     .company_id("mycompany")
///     .build()?;
/// ```
#[derive(Debug)]
pub struct AnalyticsClientBuilder {
    base_url: String,
    client_id: String,
    org_id: String,
    access_token: SecretString,
    company_id: String,
    transport: Option<Arc<dyn Transport>>,
    metrics: Option<MetricsCollector>,
}

impl Default for AnalyticsClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ENDPOINT.to_string(),
            client_id: String::new(),
            org_id: String::new(),
            access_token: SecretString::from(""),
            company_id: String::new(),
            transport: None,
            metrics: None,
        }
    }
}

impl AnalyticsClientBuilder {
    /// Create a new builder targeting the public Analytics endpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL, e.g. `https://analytics.adobe.io/api`.
    ///
    /// Trailing slashes are removed.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    pub fn org_id(mut self, org_id: impl Into<String>) -> Self {
        self.org_id = org_id.into();
        self
    }

    pub fn access_token(mut self, token: SecretString) -> Self {
        self.access_token = token;
        self
    }

    /// Set the global company id that scopes every request.
    pub fn company_id(mut self, company_id: impl Into<String>) -> Self {
        self.company_id = company_id.into();
        self
    }

    /// Send requests through a custom transport.
    ///
    /// Defaults to a plain `reqwest::Client` with no timeout and no retries.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Send requests through a preconfigured `reqwest::Client`.
    pub fn http_client(self, client: reqwest::Client) -> Self {
        self.transport(client)
    }

    /// Record request metrics with this collector.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Copy endpoint, company id and credentials from a loaded [`Config`].
    ///
    /// Timeout and retry settings are not applied here; they belong to the
    /// transport the caller builds.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = config.endpoint.clone();
        self.company_id = config.company_id.clone();
        self.client_id = config.credentials.client_id.clone();
        self.org_id = config.credentials.org_id.clone();
        self.access_token = config.credentials.access_token.clone();
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://analytics.adobe.io/api/"` -> `"https://analytics.adobe.io/api"`
    /// - `"https://analytics.adobe.io//"` -> `"https://analytics.adobe.io"`
    fn normalize_base_url(url: &str) -> &str {
        url.trim_end_matches('/')
    }

    /// Validate the configuration and build the [`AnalyticsClient`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError::Configuration`] carrying the first
    /// failing check.
    pub fn build(self) -> Result<AnalyticsClient> {
        let normalized = Self::normalize_base_url(&self.base_url).to_string();
        let base_url = parse_base_url(&normalized)?;

        let credentials = Credentials::new(
            self.client_id,
            self.org_id,
            self.access_token,
            self.company_id,
        );
        credentials.verify()?;

        let transport = match self.transport {
            Some(t) => t,
            None => Arc::new(reqwest::Client::new()),
        };

        Ok(AnalyticsClient {
            transport,
            base_url,
            base_url_str: normalized,
            credentials,
            metrics: self.metrics,
        })
    }
}

/// Parse an already normalized base URL.
///
/// The scheme is located by hand before handing the string to the URL parser,
/// because the parser happily accepts inputs such as `localhost:8080/api`
/// (scheme `localhost`) or `https:///api` (host `api`) that have no usable
/// host.
fn parse_base_url(raw: &str) -> std::result::Result<Url, ConfigurationError> {
    let rest = match split_scheme(raw)? {
        Some((_, rest)) => rest,
        None => return Err(ConfigurationError::MissingScheme),
    };

    let after_slashes = rest
        .strip_prefix("//")
        .ok_or(ConfigurationError::MissingHost)?;
    let authority = after_slashes
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    if authority.is_empty() {
        return Err(ConfigurationError::MissingHost);
    }

    let url = Url::parse(raw).map_err(|e| ConfigurationError::MalformedUrl(e.to_string()))?;
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(ConfigurationError::MissingHost),
    }
}

/// Split `scheme:rest` per RFC 3986 (`ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`).
///
/// Returns `Ok(None)` when the input carries no scheme and an error when it
/// starts with `:`.
fn split_scheme(raw: &str) -> std::result::Result<Option<(&str, &str)>, ConfigurationError> {
    for (i, c) in raw.char_indices() {
        match c {
            'a'..='z' | 'A'..='Z' => {}
            '0'..='9' | '+' | '-' | '.' if i > 0 => {}
            ':' if i == 0 => {
                return Err(ConfigurationError::MalformedUrl(format!(
                    "parse {raw:?}: missing protocol scheme"
                )));
            }
            ':' => return Ok(Some((&raw[..i], &raw[i + 1..]))),
            _ => return Ok(None),
        }
    }
    Ok(None)
}
