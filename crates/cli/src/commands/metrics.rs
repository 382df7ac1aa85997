//! Metric commands.

use analytics_client::AnalyticsClient;
use analytics_client::models::MetricsQuery;
use anyhow::{Context, Result};
use clap::Subcommand;

use super::resolve_rsid;
use crate::args::LookupArgs;
use crate::output::print_json;

#[derive(Debug, Subcommand)]
pub enum MetricsCommand {
    /// List the metrics of a report suite
    List {
        /// Report suite id
        #[arg(long)]
        rsid: Option<String>,
        #[arg(long)]
        locale: Option<String>,
        /// Only segmentable metrics
        #[arg(long)]
        segmentable: bool,
        /// Extra fields to include (comma-separated)
        #[arg(long, value_delimiter = ',')]
        expansion: Vec<String>,
    },
    /// Show one metric, e.g. metrics/pageviews
    Get {
        id: String,
        /// Report suite id
        #[arg(long)]
        rsid: Option<String>,
        #[command(flatten)]
        lookup: LookupArgs,
    },
}

pub async fn run(
    client: &AnalyticsClient,
    command: MetricsCommand,
    default_rsid: Option<&str>,
) -> Result<()> {
    match command {
        MetricsCommand::List {
            rsid,
            locale,
            segmentable,
            expansion,
        } => {
            let query = MetricsQuery {
                rsid: resolve_rsid(rsid, default_rsid)?,
                locale: locale.unwrap_or_default(),
                segmentable,
                expansion,
            };
            let metrics = client
                .metrics()
                .get_all(&query)
                .await
                .context("Failed to list metrics")?;
            print_json(&metrics)
        }
        MetricsCommand::Get { id, rsid, lookup } => {
            let rsid = resolve_rsid(rsid, default_rsid)?;
            let metric = client
                .metrics()
                .get_by_id(&rsid, &id, &lookup.into())
                .await
                .with_context(|| format!("Failed to get metric {id}"))?;
            print_json(&metric)
        }
    }
}
