//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Every client built here points at a wiremock server and uses the
//!   canonical test credentials below
//!
//! # What this does NOT handle
//! - Mock expectations (set up with wiremock directly in tests)

use std::time::Duration;

#[allow(unused_imports)]
pub use analytics_client::testing::{load_fixture, load_typed_fixture};
#[allow(unused_imports)]
pub use analytics_client::{AnalyticsClient, ClientError};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use analytics_client::RetryingTransport;
use secrecy::SecretString;

pub const BASE_PATH: &str = "/api";
pub const COMPANY_ID: &str = "aaCompanyId";
pub const CLIENT_ID: &str = "imsClientId";
pub const ORG_ID: &str = "imsOrgId";
pub const ACCESS_TOKEN: &str = "imsAuthToken";

/// Path of `resource` under the test company scope.
#[allow(dead_code)]
pub fn company_path(resource: &str) -> String {
    format!("{BASE_PATH}/{COMPANY_ID}/{resource}")
}

/// Client for `server` with the plain HTTP transport (no retries).
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> AnalyticsClient {
    client_for_uri(&server.uri())
}

/// Client for an arbitrary `http://host:port` root.
#[allow(dead_code)]
pub fn client_for_uri(uri: &str) -> AnalyticsClient {
    AnalyticsClient::builder()
        .base_url(format!("{uri}{BASE_PATH}"))
        .client_id(CLIENT_ID)
        .org_id(ORG_ID)
        .access_token(SecretString::from(ACCESS_TOKEN))
        .company_id(COMPANY_ID)
        .build()
        .expect("test client should build")
}

/// Client for `server` that retries up to `max_retries` times with
/// millisecond backoff.
#[allow(dead_code)]
pub fn retrying_client(server: &MockServer, max_retries: usize) -> AnalyticsClient {
    let transport = RetryingTransport::new(reqwest::Client::new())
        .max_retries(max_retries)
        .min_delay(Duration::from_millis(1))
        .max_delay(Duration::from_millis(10));
    AnalyticsClient::builder()
        .base_url(format!("{}{BASE_PATH}", server.uri()))
        .client_id(CLIENT_ID)
        .org_id(ORG_ID)
        .access_token(SecretString::from(ACCESS_TOKEN))
        .company_id(COMPANY_ID)
        .transport(transport)
        .build()
        .expect("retrying test client should build")
}

/// Root URI of a local port nothing listens on.
#[allow(dead_code)]
pub fn refused_uri() -> String {
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("ephemeral port should bind");
    let port = listener.local_addr().expect("bound port").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
