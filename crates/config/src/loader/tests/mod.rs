//! Tests for the configuration loader.
//!
//! Invariants:
//! - Every test touching the process environment or cwd is `#[serial]`.
//! - Environment tests start from a clean slate via [`clean_env`].

pub mod basic_tests;
pub mod env_tests;
pub mod file_tests;

use crate::constants::{
    ENV_ACCESS_TOKEN, ENV_CLIENT_ID, ENV_COMPANY_ID, ENV_CONFIG_PATH, ENV_ENDPOINT,
    ENV_MAX_RETRIES, ENV_ORG_ID, ENV_REPORT_SUITE_ID, ENV_TIMEOUT,
};
use crate::loader::builder::ConfigLoader;

/// Every variable the loader reads, unset.
pub fn clean_env() -> Vec<(&'static str, Option<&'static str>)> {
    [
        ENV_CONFIG_PATH,
        ENV_ENDPOINT,
        ENV_COMPANY_ID,
        ENV_REPORT_SUITE_ID,
        ENV_CLIENT_ID,
        ENV_ORG_ID,
        ENV_ACCESS_TOKEN,
        ENV_TIMEOUT,
        ENV_MAX_RETRIES,
    ]
    .into_iter()
    .map(|k| (k, None))
    .collect()
}

/// `clean_env()` with `overrides` applied.
pub fn env_with(
    overrides: &[(&'static str, &'static str)],
) -> Vec<(&'static str, Option<&'static str>)> {
    let mut vars = clean_env();
    for &(key, value) in overrides {
        match vars.iter_mut().find(|entry| entry.0 == key) {
            Some(entry) => entry.1 = Some(value),
            None => vars.push((key, Some(value))),
        }
    }
    vars
}

/// A loader holding the four required values.
pub fn complete_loader() -> ConfigLoader {
    ConfigLoader::new()
        .with_client_id("imsClientId".to_string())
        .with_access_token("imsAuthToken".to_string())
        .with_org_id("imsOrgId".to_string())
        .with_company_id("aaCompanyId".to_string())
}
