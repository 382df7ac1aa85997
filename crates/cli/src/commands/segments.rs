//! Segment commands.

use analytics_client::AnalyticsClient;
use analytics_client::models::SegmentsQuery;
use anyhow::{Context, Result};
use clap::Subcommand;

use super::resolve_rsid;
use crate::args::{LookupArgs, PageArgs};
use crate::output::print_json;

#[derive(Debug, Subcommand)]
pub enum SegmentsCommand {
    /// List segments (one page)
    List {
        /// Report suite ids (comma-separated, defaults to the configured suite)
        #[arg(long)]
        rsids: Option<String>,
        /// Segment ids (comma-separated)
        #[arg(long)]
        segment_filter: Option<String>,
        #[arg(long)]
        locale: Option<String>,
        /// Filter by name
        #[arg(long)]
        name: Option<String>,
        /// Tag names (comma-separated)
        #[arg(long)]
        tag_names: Option<String>,
        /// true, false or all
        #[arg(long)]
        filter_by_published_segments: Option<String>,
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
    /// Show one segment
    Get {
        id: String,
        #[command(flatten)]
        lookup: LookupArgs,
    },
}

pub async fn run(
    client: &AnalyticsClient,
    command: SegmentsCommand,
    default_rsid: Option<&str>,
) -> Result<()> {
    match command {
        SegmentsCommand::List {
            rsids,
            segment_filter,
            locale,
            name,
            tag_names,
            filter_by_published_segments,
            paging,
            sort_direction,
            sort_property,
            expansion,
            include_type,
        } => {
            let query = SegmentsQuery {
                rsids: resolve_rsid(rsids, default_rsid)?,
                segment_filter: segment_filter.unwrap_or_default(),
                locale: locale.unwrap_or_default(),
                name: name.unwrap_or_default(),
                tag_names: tag_names.unwrap_or_default(),
                filter_by_published_segments: filter_by_published_segments.unwrap_or_default(),
                limit: paging.limit,
                page: paging.page,
                sort_direction: sort_direction.unwrap_or_default(),
                sort_property: sort_property.unwrap_or_default(),
                expansion,
                include_type,
            };
            let page = client
                .segments()
                .get_all(&query)
                .await
                .context("Failed to list segments")?;
            print_json(&page)
        }
        SegmentsCommand::Get { id, lookup } => {
            let segment = client
                .segments()
                .get_by_id(&id, &lookup.into())
                .await
                .with_context(|| format!("Failed to get segment {id}"))?;
            print_json(&segment)
        }
    }
}
