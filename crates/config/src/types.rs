//! Configuration types.
//!
//! Invariants:
//! - `Debug` output never contains the access token (`SecretString` redacts it).
//! - `Config::default()` targets the public endpoint with empty credentials;
//!   it is a starting point for tests and builders, not a usable config.

use secrecy::SecretString;
use std::time::Duration;

use crate::constants::{DEFAULT_ENDPOINT, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};

/// Adobe IMS credentials sent with every request.
#[derive(Debug, Clone)]
pub struct ApiCredentials {
    /// Integration client id (API key).
    pub client_id: String,
    /// IMS organization id, e.g. `ABC123@AdobeOrg`.
    pub org_id: String,
    /// Bearer access token obtained out of band.
    pub access_token: SecretString,
}

impl Default for ApiCredentials {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            org_id: String::new(),
            access_token: SecretString::from(""),
        }
    }
}

/// Complete connection settings for one Analytics company.
#[derive(Debug, Clone)]
pub struct Config {
    /// API base URL, e.g. `https://analytics.adobe.io/api`.
    pub endpoint: String,
    /// Global company id scoping every request.
    pub company_id: String,
    /// Default report suite for commands that need one.
    pub report_suite_id: Option<String>,
    pub credentials: ApiCredentials,
    /// Per-request timeout applied to the HTTP client.
    pub timeout: Duration,
    /// Retries for throttled and transient failures.
    pub max_retries: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            company_id: String::new(),
            report_suite_id: None,
            credentials: ApiCredentials::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}
