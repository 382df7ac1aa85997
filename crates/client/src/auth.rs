//! Credentials attached to every Analytics API request.

use secrecy::{ExposeSecret, SecretString};

use crate::error::ConfigurationError;

/// The four values identifying the caller to the Analytics API.
///
/// The access token is obtained out of band (for example through a JWT
/// exchange with the identity service); this type only carries it.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Integration client id, sent as `x-api-key`.
    pub client_id: String,
    /// Organization id, sent as `x-gw-ims-org-id`.
    pub org_id: String,
    /// Bearer token.
    pub access_token: SecretString,
    /// Global company id. Scopes every request path and is sent as
    /// `x-proxy-global-company-id`.
    pub company_id: String,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        org_id: impl Into<String>,
        access_token: SecretString,
        company_id: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            org_id: org_id.into(),
            access_token,
            company_id: company_id.into(),
        }
    }

    /// Reject empty fields, checking client id, access token, org id and
    /// company id in that order.
    pub fn verify(&self) -> Result<(), ConfigurationError> {
        if self.client_id.is_empty() {
            return Err(ConfigurationError::MissingClientId);
        }
        if self.access_token.expose_secret().is_empty() {
            return Err(ConfigurationError::MissingAccessToken);
        }
        if self.org_id.is_empty() {
            return Err(ConfigurationError::MissingOrgId);
        }
        if self.company_id.is_empty() {
            return Err(ConfigurationError::MissingCompanyId);
        }
        Ok(())
    }

    /// Value of the `Authorization` header.
    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token.expose_secret())
    }
}
