//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Non-numeric timeout or retry values return `ConfigError::InvalidValue`.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_ACCESS_TOKEN, ENV_CLIENT_ID, ENV_COMPANY_ID, ENV_ENDPOINT, ENV_MAX_RETRIES, ENV_ORG_ID,
    ENV_REPORT_SUITE_ID, ENV_TIMEOUT,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_number<T: std::str::FromStr>(var: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: "must be a non-negative integer".to_string(),
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(endpoint) = env_var_or_none(ENV_ENDPOINT) {
        loader.set_endpoint(endpoint);
    }
    if let Some(company_id) = env_var_or_none(ENV_COMPANY_ID) {
        loader.set_company_id(company_id);
    }
    if let Some(rsid) = env_var_or_none(ENV_REPORT_SUITE_ID) {
        loader.set_report_suite_id(rsid);
    }
    if let Some(client_id) = env_var_or_none(ENV_CLIENT_ID) {
        loader.set_client_id(client_id);
    }
    if let Some(org_id) = env_var_or_none(ENV_ORG_ID) {
        loader.set_org_id(org_id);
    }
    if let Some(token) = env_var_or_none(ENV_ACCESS_TOKEN) {
        loader.set_access_token(SecretString::from(token));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = parse_number(ENV_TIMEOUT, &timeout)?;
        loader.set_timeout(Duration::from_secs(secs));
    }
    if let Some(retries) = env_var_or_none(ENV_MAX_RETRIES) {
        loader.set_max_retries(parse_number(ENV_MAX_RETRIES, &retries)?);
    }
    Ok(())
}
