//! analytics-cli - command-line front end for the Analytics 2.0 API.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Merge the config file, environment and flags into one `Config`.
//! - Run one resource operation and print the result as pretty JSON.
//!
//! Does NOT handle:
//! - Request composition or response decoding (see `crates/client`).
//! - Obtaining access tokens.
//!
//! Invariants:
//! - `load_dotenv()` runs BEFORE CLI parsing so `.env` values are visible to the loader.
//! - stdout carries only command output; logs and errors go to stderr.

mod args;
mod client;
mod commands;
mod dispatch;
mod error;
mod output;

use std::time::Duration;

use analytics_config::{Config, ConfigError, ConfigLoader};
use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::ConfigError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {}", e);
            std::process::exit(ExitCode::ConfigError.as_i32());
        }
    };

    let exit_code = match run_command(cli, config).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Layer the config file, the environment and the global flags, in that order.
fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut loader = ConfigLoader::new();

    // Blank paths fall back to ANALYTICS_CONFIG
    if let Some(ref path) = cli.config
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }

    loader = loader.from_file()?.from_env()?;

    if let Some(ref endpoint) = cli.endpoint {
        loader = loader.with_endpoint(endpoint.clone());
    }
    if let Some(ref company_id) = cli.company_id {
        loader = loader.with_company_id(company_id.clone());
    }
    if let Some(ref client_id) = cli.client_id {
        loader = loader.with_client_id(client_id.clone());
    }
    if let Some(ref org_id) = cli.org_id {
        loader = loader.with_org_id(org_id.clone());
    }
    if let Some(ref token) = cli.access_token {
        loader = loader.with_access_token(token.clone());
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(secs));
    }
    if let Some(retries) = cli.max_retries {
        loader = loader.with_max_retries(retries);
    }

    loader.build()
}
