//! Config file tests, including precedence against the environment.

use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

use super::{clean_env, complete_loader, env_with};
use crate::constants::{ENV_COMPANY_ID, ENV_CONFIG_PATH};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("analytics.json");
    fs::write(&path, content).unwrap();
    path
}

const FILE_CONFIG: &str = r#"{
    "analytics": {
        "endpoint": "https://file.example.com/api",
        "companyId": "fileCompany",
        "reportSuiteId": "filersid",
        "clientId": "fileClient",
        "orgId": "fileOrg",
        "accessToken": "fileToken",
        "timeoutSecs": 60,
        "maxRetries": 5
    }
}"#;

#[test]
#[serial]
fn test_from_file_loads_every_value() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, FILE_CONFIG);

    temp_env::with_vars(clean_env(), || {
        let config = ConfigLoader::new()
            .with_config_path(path.clone())
            .from_file()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.endpoint, "https://file.example.com/api");
        assert_eq!(config.company_id, "fileCompany");
        assert_eq!(config.report_suite_id.as_deref(), Some("filersid"));
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.max_retries, 5);
    });
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, FILE_CONFIG);

    temp_env::with_vars(env_with(&[(ENV_COMPANY_ID, "envCompany")]), || {
        let config = ConfigLoader::new()
            .with_config_path(path.clone())
            .from_file()
            .unwrap()
            .from_env()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.company_id, "envCompany");
        assert_eq!(config.credentials.client_id, "fileClient");
    });
}

#[test]
#[serial]
fn test_config_path_from_env() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, FILE_CONFIG);
    let path_str = path.to_string_lossy().into_owned();

    let mut vars: Vec<(&str, Option<&str>)> = clean_env()
        .into_iter()
        .filter(|(key, _)| *key != ENV_CONFIG_PATH)
        .collect();
    vars.push((ENV_CONFIG_PATH, Some(path_str.as_str())));

    temp_env::with_vars(vars, || {
        let config = ConfigLoader::new().from_file().unwrap().build().unwrap();
        assert_eq!(config.company_id, "fileCompany");
    });
}

#[test]
#[serial]
fn test_no_path_is_noop() {
    temp_env::with_vars(clean_env(), || {
        let config = complete_loader().from_file().unwrap().build().unwrap();
        assert_eq!(config.company_id, "aaCompanyId");
    });
}

#[test]
#[serial]
fn test_explicit_missing_file_is_error() {
    temp_env::with_vars(clean_env(), || {
        let err = ConfigLoader::new()
            .with_config_path(PathBuf::from("/nonexistent/analytics.json"))
            .from_file()
            .err()
            .expect("missing file should fail");
        assert!(matches!(err, ConfigError::ConfigFileRead { .. }));
    });
}

#[test]
#[serial]
fn test_blank_file_values_are_ignored() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"analytics": {"companyId": "  "}}"#);

    temp_env::with_vars(clean_env(), || {
        let config = complete_loader()
            .with_config_path(path.clone())
            .from_file()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.company_id, "aaCompanyId");
    });
}
