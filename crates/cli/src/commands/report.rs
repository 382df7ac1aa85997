//! Ranked report commands.
//!
//! Responsibilities:
//! - Load a `RankedRequest` from a JSON file, or build one from flags.
//! - Run it and print the report.
//!
//! Invariants:
//! - A request built from flags applies the date range both as a global
//!   filter and as metric filter `"0"`, and gives each metric its position
//!   as column id.
//! - `--rsid` overrides the suite in a request file; the configured suite
//!   only fills an empty one.

use analytics_client::AnalyticsClient;
use analytics_client::models::{
    RankedRequest, ReportFilter, ReportMetric, ReportMetrics, ReportSettings,
};
use anyhow::{Context, Result, bail};
use clap::Subcommand;
use std::path::{Path, PathBuf};

use super::resolve_rsid;
use crate::output::print_json;

const DATE_FILTER_ID: &str = "0";

#[derive(Debug, Subcommand)]
pub enum ReportCommand {
    /// Run a ranked report
    Run {
        /// JSON file holding the full request body
        #[arg(long, value_name = "FILE", conflicts_with_all = ["date_range"])]
        request: Option<PathBuf>,

        /// Report suite id
        #[arg(long)]
        rsid: Option<String>,

        /// Dimension to rank by
        #[arg(long, default_value = "variables/daterangeday")]
        dimension: String,

        /// ISO 8601 interval, e.g. 2020-04-01T00:00:00/2020-04-02T00:00:00
        #[arg(long)]
        date_range: Option<String>,

        /// Metric column (repeatable)
        #[arg(long = "metric", default_value = "metrics/pageviews")]
        metrics: Vec<String>,

        /// Rows per page
        #[arg(long, default_value_t = 400)]
        limit: i64,

        /// Page number (zero-based)
        #[arg(long, default_value_t = 0)]
        page: i64,
    },
}

pub async fn run(
    client: &AnalyticsClient,
    command: ReportCommand,
    default_rsid: Option<&str>,
) -> Result<()> {
    match command {
        ReportCommand::Run {
            request,
            rsid,
            dimension,
            date_range,
            metrics,
            limit,
            page,
        } => {
            let request = match request {
                Some(path) => {
                    let mut request = read_request(&path)?;
                    if rsid.is_some() || request.report_suite_id.trim().is_empty() {
                        request.report_suite_id = resolve_rsid(rsid, default_rsid)?;
                    }
                    request
                }
                None => {
                    let Some(date_range) = date_range else {
                        bail!("pass --date-range or --request");
                    };
                    build_request(
                        resolve_rsid(rsid, default_rsid)?,
                        dimension,
                        &date_range,
                        &metrics,
                        limit,
                        page,
                    )
                }
            };

            tracing::debug!(
                rsid = %request.report_suite_id,
                dimension = %request.dimension,
                "Running ranked report"
            );
            let report = client
                .reports()
                .run(&request)
                .await
                .context("Failed to run report")?;
            print_json(&report)
        }
    }
}

fn read_request(path: &Path) -> Result<RankedRequest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse request file {}", path.display()))
}

/// Build a ranked request over one date range.
pub fn build_request(
    rsid: String,
    dimension: String,
    date_range: &str,
    metrics: &[String],
    limit: i64,
    page: i64,
) -> RankedRequest {
    RankedRequest {
        global_filters: vec![ReportFilter::date_range(date_range)],
        metric_container: Some(ReportMetrics {
            metric_filters: vec![ReportFilter::date_range(date_range).with_id(DATE_FILTER_ID)],
            metrics: metrics
                .iter()
                .enumerate()
                .map(|(column, id)| ReportMetric {
                    id: Some(id.clone()),
                    column_id: Some(column.to_string()),
                    filters: vec![DATE_FILTER_ID.to_string()],
                    ..Default::default()
                })
                .collect(),
        }),
        settings: Some(ReportSettings {
            limit,
            page,
            dimension_sort: Some("asc".to_string()),
            count_repeat_instances: true,
            nones_behavior: Some("exclude-nones".to_string()),
            ..Default::default()
        }),
        ..RankedRequest::new(rsid, dimension)
    }
}
