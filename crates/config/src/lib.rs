//! Configuration management for the Analytics API client.
//!
//! This crate loads the endpoint, company id and IMS credentials from a JSON
//! config file, a `.env` file and environment variables, and hands the
//! client a finished [`Config`].

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{ApiCredentials, Config};
