//! User commands.

use analytics_client::AnalyticsClient;
use anyhow::{Context, Result};
use clap::Subcommand;

use crate::args::PageArgs;
use crate::output::print_json;

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List users of the company (one page)
    List {
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Show the user the access token belongs to
    Me,
}

pub async fn run(client: &AnalyticsClient, command: UsersCommand) -> Result<()> {
    match command {
        UsersCommand::List { paging } => {
            let page = client
                .users()
                .get_all(paging.limit, paging.page)
                .await
                .context("Failed to list users")?;
            print_json(&page)
        }
        UsersCommand::Me => {
            let user = client
                .users()
                .get_current()
                .await
                .context("Failed to get current user")?;
            print_json(&user)
        }
    }
}
