//! The Analytics API client and its resource services.
//!
//! [`AnalyticsClient`] holds only immutable state: the validated base URL,
//! the credentials, the transport and an optional metrics collector. It is
//! `Send + Sync`, cheap to clone, and safe to call from many tasks at once.
//!
//! # Submodules
//! - [`builder`]: Client construction and validation
//! - `calculated_metrics`, `collections`, `date_ranges`, `dimensions`,
//!   `metrics`, `segments`, `users`, `reports`: one service per resource
//!
//! # What this module does NOT handle:
//! - URL composition, headers and status classification (delegated to [`crate::endpoints`])
//! - Retries (a transport concern, see [`crate::retry`])
//! - Pagination: callers pass `limit`/`page` and loop themselves

pub mod builder;

mod calculated_metrics;
mod collections;
mod date_ranges;
mod dimensions;
mod metrics;
mod reports;
mod segments;
mod users;

pub use calculated_metrics::CalculatedMetricsService;
pub use collections::CollectionsService;
pub use date_ranges::DateRangesService;
pub use dimensions::DimensionsService;
pub use metrics::MetricsService;
pub use reports::ReportsService;
pub use segments::SegmentsService;
pub use users::UsersService;

use std::sync::Arc;

use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::auth::Credentials;
use crate::endpoints::{self, QueryParams, RequestContext, ToQuery, resource_path};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::transport::Transport;

/// Analytics 2.0 REST API client.
///
/// ```rust,ignore
/// use analytics_client::{AnalyticsClient, models::SegmentsQuery};
///
/// let client = AnalyticsClient::builder().from_config(&config).build()?;
/// let page = client
///     .segments()
///     .get_all(&SegmentsQuery { rsids: "myrsid".into(), limit: 10, ..Default::default() })
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) base_url: Url,
    pub(crate) base_url_str: String,
    pub(crate) credentials: Credentials,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl AnalyticsClient {
    /// Create a new client builder.
    pub fn builder() -> builder::AnalyticsClientBuilder {
        builder::AnalyticsClientBuilder::new()
    }

    /// The normalized base URL, never ending in `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url_str
    }

    pub fn company_id(&self) -> &str {
        &self.credentials.company_id
    }

    pub fn calculated_metrics(&self) -> CalculatedMetricsService<'_> {
        CalculatedMetricsService::new(self)
    }

    pub fn collections(&self) -> CollectionsService<'_> {
        CollectionsService::new(self)
    }

    pub fn date_ranges(&self) -> DateRangesService<'_> {
        DateRangesService::new(self)
    }

    pub fn dimensions(&self) -> DimensionsService<'_> {
        DimensionsService::new(self)
    }

    pub fn metrics(&self) -> MetricsService<'_> {
        MetricsService::new(self)
    }

    pub fn segments(&self) -> SegmentsService<'_> {
        SegmentsService::new(self)
    }

    pub fn users(&self) -> UsersService<'_> {
        UsersService::new(self)
    }

    pub fn reports(&self) -> ReportsService<'_> {
        ReportsService::new(self)
    }

    fn context(&self) -> RequestContext<'_> {
        RequestContext {
            transport: self.transport.as_ref(),
            base_url: &self.base_url,
            credentials: &self.credentials,
            metrics: self.metrics.as_ref(),
        }
    }

    /// Send one request to `path` (relative to the company scope) and decode
    /// the JSON response.
    ///
    /// Every resource operation goes through here. It is public so callers
    /// can reach endpoints this crate does not wrap yet.
    pub async fn send_json<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        endpoints::send_json(self.context(), method, path, query, body).await
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, query: &QueryParams) -> Result<T> {
        self.send_json::<T, ()>(Method::GET, path, query, None).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(Method::POST, path, &QueryParams::new(), Some(body))
            .await
    }

    /// `GET {path}` with the query rendered from `query`.
    pub(crate) async fn list<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: ToQuery + ?Sized,
    {
        self.get(path, &query.to_query()).await
    }

    /// `GET {path}/{id}` with `id` encoded as one path segment.
    pub(crate) async fn fetch<T, Q>(&self, path: &str, id: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: ToQuery + ?Sized,
    {
        self.get(&resource_path(path, &[id]), &query.to_query())
            .await
    }
}
