//! Pluggable HTTP transport.
//!
//! The client hands fully built [`reqwest::Request`]s to a [`Transport`] and
//! gets a [`reqwest::Response`] back. Timeouts, proxies and retries are all
//! properties of the transport the caller supplies; the client itself adds
//! none of them.

use async_trait::async_trait;
use reqwest::{Request, Response};
use std::fmt::Debug;

/// Executes a single prepared HTTP request.
///
/// Implement this to route requests through a custom stack, or wrap another
/// transport (see [`crate::retry::RetryingTransport`]).
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn execute(&self, request: Request) -> Result<Response, reqwest::Error>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn execute(&self, request: Request) -> Result<Response, reqwest::Error> {
        reqwest::Client::execute(self, request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn execute(&self, request: Request) -> Result<Response, reqwest::Error> {
        (**self).execute(request).await
    }
}
