//! Command dispatch logic.
//!
//! Responsibilities:
//! - Build the client once per invocation.
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use analytics_config::Config;
use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::client::build_client;
use crate::commands;

pub(crate) async fn run_command(cli: Cli, config: Config) -> Result<()> {
    let client = build_client(&config, cli.no_retry)?;
    let default_rsid = config.report_suite_id.as_deref();

    match cli.command {
        Commands::CalculatedMetrics { command } => {
            commands::calculated_metrics::run(&client, command).await
        }
        Commands::Collections { command } => commands::collections::run(&client, command).await,
        Commands::DateRanges { command } => commands::date_ranges::run(&client, command).await,
        Commands::Dimensions { command } => {
            commands::dimensions::run(&client, command, default_rsid).await
        }
        Commands::Metrics { command } => {
            commands::metrics::run(&client, command, default_rsid).await
        }
        Commands::Segments { command } => {
            commands::segments::run(&client, command, default_rsid).await
        }
        Commands::Users { command } => commands::users::run(&client, command).await,
        Commands::Report { command } => commands::report::run(&client, command, default_rsid).await,
    }
}
