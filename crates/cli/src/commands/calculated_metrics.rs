//! Calculated metrics commands.

use analytics_client::AnalyticsClient;
use analytics_client::models::CalculatedMetricsQuery;
use anyhow::{Context, Result};
use clap::Subcommand;

use crate::args::{LookupArgs, PageArgs};
use crate::output::print_json;

#[derive(Debug, Subcommand)]
pub enum CalculatedMetricsCommand {
    /// List calculated metrics (one page)
    List {
        /// Report suite ids (comma-separated)
        #[arg(long)]
        rsids: Option<String>,
        /// Owner ids (comma-separated)
        #[arg(long)]
        owner_id: Option<String>,
        /// Calculated metric ids (comma-separated)
        #[arg(long)]
        filter_by_ids: Option<String>,
        /// Only metrics usable in this report suite
        #[arg(long)]
        to_be_used_in_rsid: Option<String>,
        #[arg(long)]
        locale: Option<String>,
        /// Filter by name
        #[arg(long)]
        name: Option<String>,
        /// Tag names (comma-separated)
        #[arg(long)]
        tag_names: Option<String>,
        /// Only favorites
        #[arg(long)]
        favorite: bool,
        /// Only approved metrics
        #[arg(long)]
        approved: bool,
        #[command(flatten)]
        paging: PageArgs,
        /// ASC or DESC
        #[arg(long)]
        sort_direction: Option<String>,
        #[arg(long)]
        sort_property: Option<String>,
        /// Extra fields to include (comma-separated)
        #[arg(long, value_delimiter = ',')]
        expansion: Vec<String>,
        /// Ownership types to include (comma-separated)
        #[arg(long, value_delimiter = ',')]
        include_type: Vec<String>,
    },
    /// Show one calculated metric
    Get {
        id: String,
        #[command(flatten)]
        lookup: LookupArgs,
    },
}

pub async fn run(client: &AnalyticsClient, command: CalculatedMetricsCommand) -> Result<()> {
    match command {
        CalculatedMetricsCommand::List {
            rsids,
            owner_id,
            filter_by_ids,
            to_be_used_in_rsid,
            locale,
            name,
            tag_names,
            favorite,
            approved,
            paging,
            sort_direction,
            sort_property,
            expansion,
            include_type,
        } => {
            let query = CalculatedMetricsQuery {
                rsids: rsids.unwrap_or_default(),
                owner_id: owner_id.unwrap_or_default(),
                filter_by_ids: filter_by_ids.unwrap_or_default(),
                to_be_used_in_rsid: to_be_used_in_rsid.unwrap_or_default(),
                locale: locale.unwrap_or_default(),
                name: name.unwrap_or_default(),
                tag_names: tag_names.unwrap_or_default(),
                favorite,
                approved,
                limit: paging.limit,
                page: paging.page,
                sort_direction: sort_direction.unwrap_or_default(),
                sort_property: sort_property.unwrap_or_default(),
                expansion,
                include_type,
            };
            let page = client
                .calculated_metrics()
                .get_all(&query)
                .await
                .context("Failed to list calculated metrics")?;
            print_json(&page)
        }
        CalculatedMetricsCommand::Get { id, lookup } => {
            let metric = client
                .calculated_metrics()
                .get_by_id(&id, &lookup.into())
                .await
                .with_context(|| format!("Failed to get calculated metric {id}"))?;
            print_json(&metric)
        }
    }
}
