//! Error types for the Analytics client.
//!
//! Construction problems are reported through [`ConfigurationError`] and are
//! only ever raised by [`crate::AnalyticsClientBuilder::build`]. Every other
//! variant of [`ClientError`] comes out of the request pipeline.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Invalid client configuration, detected eagerly at construction time.
///
/// Checks run in a fixed order (URL form, scheme, host, client id, access
/// token, org id, company id) and the first failing check is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("malformed URL: {0}")]
    MalformedUrl(String),

    #[error("missing URL scheme")]
    MissingScheme,

    #[error("missing URL host")]
    MissingHost,

    #[error("missing ClientID")]
    MissingClientId,

    #[error("missing AccessToken")]
    MissingAccessToken,

    #[error("missing OrgID")]
    MissingOrgId,

    #[error("missing CompanyID")]
    MissingCompanyId,
}

/// Errors that can occur during Analytics client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The client could not be constructed.
    #[error("Invalid client configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Network-level failure reported by the transport (DNS, connect, TLS, timeout).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response arrived with a status outside 200..=299.
    ///
    /// The body is kept verbatim and is never parsed.
    #[error("received unexpected status code {status} from {url}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        body: String,
    },

    /// A successful response body did not match the expected shape.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The request URL could not be composed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A credential cannot be carried in an HTTP header.
    #[error("Invalid value for header {0}")]
    InvalidHeader(&'static str),
}

impl ClientError {
    /// HTTP status carried by an [`ClientError::UnexpectedStatus`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error came from the transport layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this error is a decode failure of a successful response.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Check if this error was raised while building the client.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
