//! Environment variable tests for the configuration loader.

use secrecy::ExposeSecret;
use serial_test::serial;
use std::time::Duration;

use super::{clean_env, env_with};
use crate::constants::{
    ENV_ACCESS_TOKEN, ENV_CLIENT_ID, ENV_COMPANY_ID, ENV_ENDPOINT, ENV_MAX_RETRIES, ENV_ORG_ID,
    ENV_REPORT_SUITE_ID, ENV_TIMEOUT,
};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

const FULL_ENV: &[(&str, &str)] = &[
    (ENV_ENDPOINT, "https://env.example.com/api"),
    (ENV_COMPANY_ID, "envCompany"),
    (ENV_REPORT_SUITE_ID, "envrsid"),
    (ENV_CLIENT_ID, "envClient"),
    (ENV_ORG_ID, "envOrg"),
    (ENV_ACCESS_TOKEN, "envToken"),
    (ENV_TIMEOUT, "45"),
    (ENV_MAX_RETRIES, "2"),
];

#[test]
#[serial]
fn test_from_env_reads_every_variable() {
    temp_env::with_vars(env_with(FULL_ENV), || {
        let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
        assert_eq!(config.endpoint, "https://env.example.com/api");
        assert_eq!(config.company_id, "envCompany");
        assert_eq!(config.report_suite_id.as_deref(), Some("envrsid"));
        assert_eq!(config.credentials.client_id, "envClient");
        assert_eq!(config.credentials.org_id, "envOrg");
        assert_eq!(config.credentials.access_token.expose_secret(), "envToken");
        assert_eq!(config.timeout, Duration::from_secs(45));
        assert_eq!(config.max_retries, 2);
    });
}

#[test]
#[serial]
fn test_builder_overrides_env() {
    temp_env::with_vars(env_with(FULL_ENV), || {
        let config = ConfigLoader::new()
            .from_env()
            .unwrap()
            .with_company_id("flagCompany".to_string())
            .build()
            .unwrap();
        assert_eq!(config.company_id, "flagCompany");
        assert_eq!(config.credentials.client_id, "envClient");
    });
}

#[test]
#[serial]
fn test_empty_and_whitespace_vars_are_unset() {
    temp_env::with_vars(
        env_with(&[(ENV_CLIENT_ID, ""), (ENV_ACCESS_TOKEN, "   ")]),
        || {
            let err = ConfigLoader::new().from_env().unwrap().build().unwrap_err();
            assert!(matches!(err, ConfigError::MissingValue(var) if var == ENV_CLIENT_ID));
        },
    );
}

#[test]
#[serial]
fn test_values_are_trimmed() {
    temp_env::with_vars(env_with(&[(ENV_COMPANY_ID, "  padded  ")]), || {
        let config = super::complete_loader()
            .from_env()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.company_id, "padded");
    });
}

#[test]
#[serial]
fn test_invalid_numbers_are_rejected() {
    temp_env::with_vars(env_with(&[(ENV_TIMEOUT, "thirty")]), || {
        let err = ConfigLoader::new().from_env().err().expect("should fail");
        assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == ENV_TIMEOUT));
    });
    temp_env::with_vars(env_with(&[(ENV_MAX_RETRIES, "-1")]), || {
        let err = ConfigLoader::new().from_env().err().expect("should fail");
        assert!(
            matches!(err, ConfigError::InvalidValue { ref var, .. } if var == ENV_MAX_RETRIES)
        );
    });
}

#[test]
#[serial]
fn test_clean_env_leaves_defaults() {
    temp_env::with_vars(clean_env(), || {
        let config = super::complete_loader()
            .from_env()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.endpoint, "https://analytics.adobe.io/api");
    });
}
