//! Builder defaults, required values and bounds.

use secrecy::ExposeSecret;
use std::time::Duration;

use super::complete_loader;
use crate::constants::{ENV_ACCESS_TOKEN, ENV_CLIENT_ID, ENV_COMPANY_ID, ENV_ORG_ID};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

#[test]
fn test_build_applies_defaults() {
    let config = complete_loader().build().unwrap();
    assert_eq!(config.endpoint, "https://analytics.adobe.io/api");
    assert_eq!(config.company_id, "aaCompanyId");
    assert_eq!(config.credentials.client_id, "imsClientId");
    assert_eq!(config.credentials.org_id, "imsOrgId");
    assert_eq!(config.credentials.access_token.expose_secret(), "imsAuthToken");
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.max_retries, 10);
    assert!(config.report_suite_id.is_none());
}

#[test]
fn test_builder_overrides() {
    let config = complete_loader()
        .with_endpoint("http://localhost:8080/api".to_string())
        .with_report_suite_id("examplersid".to_string())
        .with_timeout(Duration::from_secs(5))
        .with_max_retries(0)
        .build()
        .unwrap();
    assert_eq!(config.endpoint, "http://localhost:8080/api");
    assert_eq!(config.report_suite_id.as_deref(), Some("examplersid"));
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.max_retries, 0);
}

#[test]
fn test_missing_values_reported_in_order() {
    let missing = |loader: ConfigLoader| match loader.build() {
        Err(ConfigError::MissingValue(var)) => var,
        other => panic!("expected MissingValue, got {other:?}"),
    };

    assert_eq!(missing(ConfigLoader::new()), ENV_CLIENT_ID);
    assert_eq!(
        missing(ConfigLoader::new().with_client_id("c".to_string())),
        ENV_ACCESS_TOKEN
    );
    assert_eq!(
        missing(
            ConfigLoader::new()
                .with_client_id("c".to_string())
                .with_access_token("t".to_string())
        ),
        ENV_ORG_ID
    );
    assert_eq!(
        missing(
            ConfigLoader::new()
                .with_client_id("c".to_string())
                .with_access_token("t".to_string())
                .with_org_id("o".to_string())
        ),
        ENV_COMPANY_ID
    );
}

#[test]
fn test_missing_value_message_names_variable() {
    let err = ConfigLoader::new().build().unwrap_err();
    assert!(err.to_string().contains("ANALYTICS_CLIENT_ID"));
}

#[test]
fn test_timeout_bounds() {
    let err = complete_loader()
        .with_timeout(Duration::from_secs(0))
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTimeout { .. }));

    let err = complete_loader()
        .with_timeout(Duration::from_secs(3601))
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTimeout { .. }));

    assert!(
        complete_loader()
            .with_timeout(Duration::from_secs(3600))
            .build()
            .is_ok()
    );
}

#[test]
fn test_max_retries_bound() {
    let err = complete_loader().with_max_retries(21).build().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidMaxRetries { .. }));
    assert!(complete_loader().with_max_retries(20).build().is_ok());
}

mod prop {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn timeout_accepted_only_within_bounds(secs in 0u64..10_000) {
            let result = complete_loader()
                .with_timeout(Duration::from_secs(secs))
                .build();
            prop_assert_eq!(result.is_ok(), (1..=3600).contains(&secs));
        }

        #[test]
        fn max_retries_accepted_only_within_bounds(retries in 0usize..100) {
            let result = complete_loader().with_max_retries(retries).build();
            prop_assert_eq!(result.is_ok(), retries <= 20);
        }
    }
}
