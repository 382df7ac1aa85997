//! Centralized constants for the Analytics client workspace.
//!
//! Default values used across crates, kept here to avoid magic number
//! duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Public Analytics 2.0 API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://analytics.adobe.io/api";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Retry Defaults
// =============================================================================

/// Default maximum number of retries for throttled or failed requests.
pub const DEFAULT_MAX_RETRIES: usize = 10;

/// Upper bound accepted for the retry count.
pub const MAX_MAX_RETRIES: usize = 20;

/// Delay before the first retry in milliseconds. Doubles on each attempt.
pub const DEFAULT_RETRY_MIN_DELAY_MS: u64 = 1000;

/// Cap for any single retry delay in seconds.
pub const DEFAULT_RETRY_MAX_DELAY_SECS: u64 = 30;

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_CONFIG_PATH: &str = "ANALYTICS_CONFIG";
pub const ENV_ENDPOINT: &str = "ANALYTICS_ENDPOINT";
pub const ENV_COMPANY_ID: &str = "ANALYTICS_COMPANY_ID";
pub const ENV_REPORT_SUITE_ID: &str = "ANALYTICS_REPORT_SUITE_ID";
pub const ENV_CLIENT_ID: &str = "ANALYTICS_CLIENT_ID";
pub const ENV_ORG_ID: &str = "ANALYTICS_ORG_ID";
pub const ENV_ACCESS_TOKEN: &str = "ANALYTICS_ACCESS_TOKEN";
pub const ENV_TIMEOUT: &str = "ANALYTICS_TIMEOUT";
pub const ENV_MAX_RETRIES: &str = "ANALYTICS_MAX_RETRIES";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
