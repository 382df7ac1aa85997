//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Define the argument groups shared by the list and lookup subcommands.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not read environment variables; `ConfigLoader` owns that.

use analytics_client::models::LookupOptions;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "analytics-cli")]
#[command(about = "Query the Adobe Analytics 2.0 API from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  analytics-cli users me\n  analytics-cli segments list --rsids myrsid --limit 5\n  analytics-cli dimensions get variables/page --rsid myrsid\n  analytics-cli report run --date-range 2020-04-01T00:00:00/2020-04-02T00:00:00\n  analytics-cli report run --request request.json\n"
)]
pub struct Cli {
    /// Path to a JSON config file (falls back to ANALYTICS_CONFIG)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// API base URL, e.g. https://analytics.adobe.io/api
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Global company id that scopes every request
    #[arg(long, global = true)]
    pub company_id: Option<String>,

    /// IMS client id, sent as x-api-key
    #[arg(long, global = true)]
    pub client_id: Option<String>,

    /// IMS organization id
    #[arg(long, global = true)]
    pub org_id: Option<String>,

    /// IMS access token
    #[arg(long, global = true)]
    pub access_token: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Maximum number of retries for throttled or failed requests
    #[arg(long, global = true, value_name = "N")]
    pub max_retries: Option<usize>,

    /// Send every request exactly once
    #[arg(long, global = true)]
    pub no_retry: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List and look up calculated metrics
    CalculatedMetrics {
        #[command(subcommand)]
        command: commands::calculated_metrics::CalculatedMetricsCommand,
    },

    /// List and look up report suites
    Collections {
        #[command(subcommand)]
        command: commands::collections::CollectionsCommand,
    },

    /// List and look up saved date ranges
    DateRanges {
        #[command(subcommand)]
        command: commands::date_ranges::DateRangesCommand,
    },

    /// List and look up dimensions of a report suite
    Dimensions {
        #[command(subcommand)]
        command: commands::dimensions::DimensionsCommand,
    },

    /// List and look up metrics of a report suite
    Metrics {
        #[command(subcommand)]
        command: commands::metrics::MetricsCommand,
    },

    /// List and look up segments
    Segments {
        #[command(subcommand)]
        command: commands::segments::SegmentsCommand,
    },

    /// List users or show the current user
    Users {
        #[command(subcommand)]
        command: commands::users::UsersCommand,
    },

    /// Run ranked reports
    Report {
        #[command(subcommand)]
        command: commands::report::ReportCommand,
    },
}

/// Paging flags shared by the paged list commands.
#[derive(Debug, Clone, Args)]
pub struct PageArgs {
    /// Number of results per page
    #[arg(long, default_value_t = 10)]
    pub limit: i64,

    /// Page number (zero-based)
    #[arg(long, default_value_t = 0)]
    pub page: i64,
}

/// Flags shared by the single-component lookups.
#[derive(Debug, Clone, Args)]
pub struct LookupArgs {
    /// Locale for localized names, e.g. en_US
    #[arg(long)]
    pub locale: Option<String>,

    /// Extra fields to include (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub expansion: Vec<String>,
}

impl From<LookupArgs> for LookupOptions {
    fn from(args: LookupArgs) -> Self {
        LookupOptions {
            locale: args.locale.unwrap_or_default(),
            expansion: args.expansion,
        }
    }
}
