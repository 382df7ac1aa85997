//! Error types for configuration loading.
//!
//! Invariants:
//! - Variants name the variable or path involved.
//! - Dotenv and config file errors never include raw file content, which
//!   may hold the access token.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required value was not provided by any source.
    #[error("Missing required value: set {0} or pass the matching command-line flag")]
    MissingValue(&'static str),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },

    #[error("invalid max retries: {message}")]
    InvalidMaxRetries { message: String },

    #[error("Failed to read config file at {path}: {kind}")]
    ConfigFileRead { path: PathBuf, kind: ErrorKind },

    /// The config file is not valid JSON or has the wrong shape.
    ///
    /// Only the line and column are reported, never the offending text.
    #[error("Failed to parse config file at {path} (line {line}, column {column})")]
    ConfigFileParse {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// Only the byte index of the failure is included, never the line.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
