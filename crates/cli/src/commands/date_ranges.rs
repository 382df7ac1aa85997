//! Date range commands.

use analytics_client::AnalyticsClient;
use analytics_client::models::DateRangesQuery;
use anyhow::{Context, Result};
use clap::Subcommand;

use crate::args::{LookupArgs, PageArgs};
use crate::output::print_json;

#[derive(Debug, Subcommand)]
pub enum DateRangesCommand {
    /// List saved date ranges (one page)
    List {
        #[arg(long)]
        locale: Option<String>,
        /// Date range ids (comma-separated)
        #[arg(long)]
        filter_by_ids: Option<String>,
        #[command(flatten)]
        paging: PageArgs,
        /// Extra fields to include (comma-separated)
        #[arg(long, value_delimiter = ',')]
        expansion: Vec<String>,
        /// Ownership types to include (comma-separated)
        #[arg(long, value_delimiter = ',')]
        include_type: Vec<String>,
    },
    /// Show one date range
    Get {
        id: String,
        #[command(flatten)]
        lookup: LookupArgs,
    },
}

pub async fn run(client: &AnalyticsClient, command: DateRangesCommand) -> Result<()> {
    match command {
        DateRangesCommand::List {
            locale,
            filter_by_ids,
            paging,
            expansion,
            include_type,
        } => {
            let query = DateRangesQuery {
                locale: locale.unwrap_or_default(),
                filter_by_ids: filter_by_ids.unwrap_or_default(),
                limit: paging.limit,
                page: paging.page,
                expansion,
                include_type,
            };
            let page = client
                .date_ranges()
                .get_all(&query)
                .await
                .context("Failed to list date ranges")?;
            print_json(&page)
        }
        DateRangesCommand::Get { id, lookup } => {
            let range = client
                .date_ranges()
                .get_by_id(&id, &lookup.into())
                .await
                .with_context(|| format!("Failed to get date range {id}"))?;
            print_json(&range)
        }
    }
}
