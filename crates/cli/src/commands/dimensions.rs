//! Dimension commands.
//!
//! Both operations are scoped to one report suite, taken from `--rsid` or
//! the configured default.

use analytics_client::AnalyticsClient;
use analytics_client::models::DimensionsQuery;
use anyhow::{Context, Result};
use clap::Subcommand;

use super::resolve_rsid;
use crate::args::LookupArgs;
use crate::output::print_json;

#[derive(Debug, Subcommand)]
pub enum DimensionsCommand {
    /// List the dimensions of a report suite
    List {
        /// Report suite id
        #[arg(long)]
        rsid: Option<String>,
        #[arg(long)]
        locale: Option<String>,
        /// Only segmentable dimensions
        #[arg(long)]
        segmentable: bool,
        /// Only reportable dimensions
        #[arg(long)]
        reportable: bool,
        /// Only classifiable dimensions
        #[arg(long)]
        classifiable: bool,
        /// Extra fields to include (comma-separated)
        #[arg(long, value_delimiter = ',')]
        expansion: Vec<String>,
    },
    /// Show one dimension, e.g. variables/page
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
    command: DimensionsCommand,
    default_rsid: Option<&str>,
) -> Result<()> {
    match command {
        DimensionsCommand::List {
            rsid,
            locale,
            segmentable,
            reportable,
            classifiable,
            expansion,
        } => {
            let query = DimensionsQuery {
                rsid: resolve_rsid(rsid, default_rsid)?,
                locale: locale.unwrap_or_default(),
                segmentable,
                reportable,
                classifiable,
                expansion,
            };
            let dimensions = client
                .dimensions()
                .get_all(&query)
                .await
                .context("Failed to list dimensions")?;
            print_json(&dimensions)
        }
        DimensionsCommand::Get { id, rsid, lookup } => {
            let rsid = resolve_rsid(rsid, default_rsid)?;
            let dimension = client
                .dimensions()
                .get_by_id(&rsid, &id, &lookup.into())
                .await
                .with_context(|| format!("Failed to get dimension {id}"))?;
            print_json(&dimension)
        }
    }
}
