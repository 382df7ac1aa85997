//! JSON config file loading.
//!
//! The file holds a single `analytics` object; every key is optional:
//!
//! ```json
//! {
//!   "analytics": {
//!     "endpoint": "https://analytics.adobe.io/api",
//!     "companyId": "mycompany",
//!     "reportSuiteId": "myrsid",
//!     "clientId": "...",
//!     "orgId": "...@AdobeOrg",
//!     "accessToken": "...",
//!     "timeoutSecs": 30,
//!     "maxRetries": 10
//!   }
//! }
//! ```
//!
//! Invariants:
//! - Values from the file are applied before environment variables.
//! - Unknown keys are ignored.

use secrecy::SecretString;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    analytics: AnalyticsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyticsSection {
    endpoint: Option<String>,
    company_id: Option<String>,
    report_suite_id: Option<String>,
    client_id: Option<String>,
    org_id: Option<String>,
    access_token: Option<String>,
    timeout_secs: Option<u64>,
    max_retries: Option<usize>,
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        kind: e.kind(),
    })?;
    serde_json::from_str(&content).map_err(|e| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        line: e.line(),
        column: e.column(),
    })
}

/// Apply the config file at `path` to the loader.
pub fn apply_file(loader: &mut ConfigLoader, path: &Path) -> Result<(), ConfigError> {
    let section = read_config_file(path)?.analytics;
    tracing::debug!(path = %path.display(), "Loaded config file");

    let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

    if let Some(endpoint) = non_empty(section.endpoint) {
        loader.set_endpoint(endpoint);
    }
    if let Some(company_id) = non_empty(section.company_id) {
        loader.set_company_id(company_id);
    }
    if let Some(rsid) = non_empty(section.report_suite_id) {
        loader.set_report_suite_id(rsid);
    }
    if let Some(client_id) = non_empty(section.client_id) {
        loader.set_client_id(client_id);
    }
    if let Some(org_id) = non_empty(section.org_id) {
        loader.set_org_id(org_id);
    }
    if let Some(token) = non_empty(section.access_token) {
        loader.set_access_token(SecretString::from(token));
    }
    if let Some(secs) = section.timeout_secs {
        loader.set_timeout(Duration::from_secs(secs));
    }
    if let Some(retries) = section.max_retries {
        loader.set_max_retries(retries);
    }
    Ok(())
}
