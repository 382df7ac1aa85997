//! Configuration loader for environment variables and files.
//!
//! Responsibilities:
//! - Load configuration from a JSON config file, `.env` and environment variables.
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Enforce the `DOTENV_DISABLED` gate so tests never read a stray `.env`.
//!
//! Does NOT handle:
//! - Validating URL shape or credential contents (the client does that).
//! - Obtaining access tokens.
//!
//! Invariants / Assumptions:
//! - Precedence, low to high: config file, environment, explicit `with_*` calls.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod file;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
