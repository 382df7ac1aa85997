//! Report suite (collection) commands.

use analytics_client::AnalyticsClient;
use analytics_client::models::CollectionsQuery;
use anyhow::{Context, Result};
use clap::Subcommand;

use crate::args::PageArgs;
use crate::output::print_json;

#[derive(Debug, Subcommand)]
pub enum CollectionsCommand {
    /// List report suites (one page)
    List {
        /// Report suite ids (comma-separated)
        #[arg(long)]
        rsids: Option<String>,
        /// Only suites whose id contains this text
        #[arg(long)]
        rsid_contains: Option<String>,
        #[command(flatten)]
        paging: PageArgs,
        /// Extra fields to include (comma-separated)
        #[arg(long, value_delimiter = ',')]
        expansion: Vec<String>,
    },
    /// Show one report suite
    Get {
        /// Report suite id
        id: String,
        /// Extra fields to include (comma-separated)
        #[arg(long, value_delimiter = ',')]
        expansion: Vec<String>,
    },
}

pub async fn run(client: &AnalyticsClient, command: CollectionsCommand) -> Result<()> {
    match command {
        CollectionsCommand::List {
            rsids,
            rsid_contains,
            paging,
            expansion,
        } => {
            let query = CollectionsQuery {
                rsids: rsids.unwrap_or_default(),
                rsid_contains: rsid_contains.unwrap_or_default(),
                limit: paging.limit,
                page: paging.page,
                expansion,
            };
            let page = client
                .collections()
                .get_all(&query)
                .await
                .context("Failed to list report suites")?;
            print_json(&page)
        }
        CollectionsCommand::Get { id, expansion } => {
            let suite = client
                .collections()
                .get_by_id(&id, &expansion)
                .await
                .with_context(|| format!("Failed to get report suite {id}"))?;
            print_json(&suite)
        }
    }
}
