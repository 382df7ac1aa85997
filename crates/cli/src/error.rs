//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError` and `ConfigError` to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).

use analytics_client::ClientError;
use analytics_config::ConfigError;

/// Structured exit codes for analytics-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Missing or invalid settings or credentials.
    ///
    /// Scripts should fix the configuration and not retry.
    ConfigError = 2,

    /// Network, TLS or timeout failure.
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 3,

    /// The API answered with a non-2xx status.
    ApiError = 4,

    /// A successful response could not be decoded.
    DecodeError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Configuration(_) => ExitCode::ConfigError,
            // A credential that cannot travel in a header is a configuration problem
            ClientError::InvalidHeader(_) => ExitCode::ConfigError,
            ClientError::Transport(_) => ExitCode::ConnectionError,
            ClientError::UnexpectedStatus { .. } => ExitCode::ApiError,
            ClientError::Decode { .. } => ExitCode::DecodeError,
            ClientError::Encode(_) | ClientError::InvalidUrl(_) => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns `ExitCode::GeneralError` unless a known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ConfigError;
            }
        }
        ExitCode::GeneralError
    }
}
