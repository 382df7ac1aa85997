//! Shared test utilities for analytics-cli integration tests.
//!
//! Invariants / Assumptions:
//! - Every command is hermetic: `DOTENV_DISABLED=1` and no host `ANALYTICS_*` leakage.
//! - Credentials are the fixed test values below unless a test overrides them.

#![allow(dead_code)]

use assert_cmd::Command;
use wiremock::MockServer;

pub const COMPANY_ID: &str = "aaCompanyId";
pub const CLIENT_ID: &str = "imsClientId";
pub const ORG_ID: &str = "imsOrgId";
pub const ACCESS_TOKEN: &str = "imsAuthToken";

const ANALYTICS_VARS: &[&str] = &[
    "ANALYTICS_CONFIG",
    "ANALYTICS_ENDPOINT",
    "ANALYTICS_COMPANY_ID",
    "ANALYTICS_REPORT_SUITE_ID",
    "ANALYTICS_CLIENT_ID",
    "ANALYTICS_ORG_ID",
    "ANALYTICS_ACCESS_TOKEN",
    "ANALYTICS_TIMEOUT",
    "ANALYTICS_MAX_RETRIES",
];

/// A hermetic `analytics-cli` command with no configuration at all.
pub fn bare_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("analytics-cli");
    cmd.env("DOTENV_DISABLED", "1");
    for var in ANALYTICS_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// A hermetic command carrying the test credentials.
pub fn analytics_cmd() -> Command {
    let mut cmd = bare_cmd();
    cmd.env("ANALYTICS_COMPANY_ID", COMPANY_ID)
        .env("ANALYTICS_CLIENT_ID", CLIENT_ID)
        .env("ANALYTICS_ORG_ID", ORG_ID)
        .env("ANALYTICS_ACCESS_TOKEN", ACCESS_TOKEN);
    cmd
}

/// A hermetic command pointed at `server` with base path `/api`.
pub fn analytics_cmd_for(server: &MockServer) -> Command {
    let mut cmd = analytics_cmd();
    cmd.env("ANALYTICS_ENDPOINT", format!("{}/api", server.uri()));
    cmd
}

/// `/api/{company}/{path}`
pub fn company_path(path: &str) -> String {
    format!("/api/{COMPANY_ID}/{path}")
}
