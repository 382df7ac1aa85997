//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Build and bound-check the final `Config`.
//!
//! Does NOT handle:
//! - Environment variable parsing (delegated to env.rs).
//! - Config file parsing (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Each source overwrites only the values it provides.
//! - Call order sets precedence: `from_file`, then `from_env`, then `with_*`.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::env::{apply_env, env_var_or_none};
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{
    DEFAULT_ENDPOINT, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS, ENV_ACCESS_TOKEN, ENV_CLIENT_ID,
    ENV_COMPANY_ID, ENV_CONFIG_PATH, ENV_DOTENV_DISABLED, ENV_ORG_ID, MAX_MAX_RETRIES,
    MAX_TIMEOUT_SECS,
};
use crate::types::{ApiCredentials, Config};

/// Configuration loader that merges a config file, the environment and
/// explicit overrides.
///
/// ```no_run
/// use analytics_config::ConfigLoader;
///
/// let config = ConfigLoader::new()
///     .load_dotenv()?
///     .from_file()?
///     .from_env()?
///     .build()?;
/// # Ok::<(), analytics_config::ConfigError>(())
/// ```
#[derive(Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    endpoint: Option<String>,
    company_id: Option<String>,
    report_suite_id: Option<String>,
    client_id: Option<String>,
    org_id: Option<String>,
    access_token: Option<SecretString>,
    timeout: Option<Duration>,
    max_retries: Option<usize>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// Skipped when `DOTENV_DISABLED` is `true` or `1`. A missing file is not
    /// an error.
    ///
    /// # Errors
    ///
    /// `ConfigError::DotenvParse` on invalid syntax and
    /// `ConfigError::DotenvIo` when the file exists but cannot be read.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Use the config file at `path` instead of `ANALYTICS_CONFIG`.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Apply the JSON config file.
    ///
    /// The path comes from [`ConfigLoader::with_config_path`] or, failing
    /// that, `ANALYTICS_CONFIG`. Without either this is a no-op. A path that
    /// was given but cannot be read is an error.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        let path = self
            .config_path
            .clone()
            .or_else(|| env_var_or_none(ENV_CONFIG_PATH).map(PathBuf::from));
        if let Some(path) = path {
            apply_file(&mut self, &path)?;
        }
        Ok(self)
    }

    /// Apply `ANALYTICS_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn with_company_id(mut self, company_id: String) -> Self {
        self.company_id = Some(company_id);
        self
    }

    pub fn with_report_suite_id(mut self, rsid: String) -> Self {
        self.report_suite_id = Some(rsid);
        self
    }

    pub fn with_client_id(mut self, client_id: String) -> Self {
        self.client_id = Some(client_id);
        self
    }

    pub fn with_org_id(mut self, org_id: String) -> Self {
        self.org_id = Some(org_id);
        self
    }

    pub fn with_access_token(mut self, token: String) -> Self {
        self.access_token = Some(SecretString::from(token));
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// - `MissingValue` for the first absent of client id, access token,
    ///   org id and company id, naming its environment variable
    /// - `InvalidTimeout` for a zero timeout or one above the maximum
    /// - `InvalidMaxRetries` above the maximum retry count
    pub fn build(self) -> Result<Config, ConfigError> {
        let client_id = self.client_id.ok_or(ConfigError::MissingValue(ENV_CLIENT_ID))?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingValue(ENV_ACCESS_TOKEN))?;
        let org_id = self.org_id.ok_or(ConfigError::MissingValue(ENV_ORG_ID))?;
        let company_id = self
            .company_id
            .ok_or(ConfigError::MissingValue(ENV_COMPANY_ID))?;

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        Self::validate_timeout(timeout)?;

        let max_retries = self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES);
        if max_retries > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!("must be between 0 and {MAX_MAX_RETRIES} (got {max_retries})"),
            });
        }

        Ok(Config {
            endpoint: self
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            company_id,
            report_suite_id: self.report_suite_id,
            credentials: ApiCredentials {
                client_id,
                org_id,
                access_token,
            },
            timeout,
            max_retries,
        })
    }

    fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
        let secs = timeout.as_secs();
        if secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }
        if secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {MAX_TIMEOUT_SECS} seconds"
                ),
            });
        }
        Ok(())
    }

    // Internal setters for the env and file modules

    pub(crate) fn set_endpoint(&mut self, endpoint: String) {
        self.endpoint = Some(endpoint);
    }

    pub(crate) fn set_company_id(&mut self, company_id: String) {
        self.company_id = Some(company_id);
    }

    pub(crate) fn set_report_suite_id(&mut self, rsid: String) {
        self.report_suite_id = Some(rsid);
    }

    pub(crate) fn set_client_id(&mut self, client_id: String) {
        self.client_id = Some(client_id);
    }

    pub(crate) fn set_org_id(&mut self, org_id: String) {
        self.org_id = Some(org_id);
    }

    pub(crate) fn set_access_token(&mut self, token: SecretString) {
        self.access_token = Some(token);
    }

    pub(crate) fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    pub(crate) fn set_max_retries(&mut self, retries: usize) {
        self.max_retries = Some(retries);
    }
}
