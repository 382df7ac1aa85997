//! Metric API methods.

use crate::client::AnalyticsClient;
use crate::endpoints::{QueryParams, ToQuery};
use crate::error::Result;
use crate::models::{LookupOptions, Metric, MetricsQuery};
use crate::query_params;

const PATH: &str = "metrics";

impl ToQuery for MetricsQuery {
    fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        query_params! { params =>
            "rsid" => required &self.rsid,
            "locale" => optional &self.locale,
            "segmentable" => flag self.segmentable,
            "expansion" => list &self.expansion,
        }
        params
    }
}

/// Metrics of a report suite. Not paged.
#[derive(Debug, Clone, Copy)]
pub struct MetricsService<'a> {
    client: &'a AnalyticsClient,
}

impl<'a> MetricsService<'a> {
    pub(crate) fn new(client: &'a AnalyticsClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self, query: &MetricsQuery) -> Result<Vec<Metric>> {
        self.client.list(PATH, query).await
    }

    pub async fn get_by_id(&self, rsid: &str, id: &str, options: &LookupOptions) -> Result<Metric> {
        let params = options.to_query().required("rsid", rsid);
        self.client.fetch(PATH, id, &params).await
    }
}
