//! CLI command implementations, one module per resource.

pub mod calculated_metrics;
pub mod collections;
pub mod date_ranges;
pub mod dimensions;
pub mod metrics;
pub mod report;
pub mod segments;
pub mod users;

use analytics_config::constants::ENV_REPORT_SUITE_ID;
use anyhow::{Result, anyhow};

/// Pick the report suite from the flag, falling back to the configured one.
pub fn resolve_rsid(flag: Option<String>, default_rsid: Option<&str>) -> Result<String> {
    flag.filter(|s| !s.trim().is_empty())
        .or_else(|| default_rsid.map(str::to_string))
        .ok_or_else(|| {
            anyhow!("missing report suite id: pass --rsid or set {ENV_REPORT_SUITE_ID}")
        })
}
