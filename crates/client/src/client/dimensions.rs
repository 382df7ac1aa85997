//! Dimension API methods.

use crate::client::AnalyticsClient;
use crate::endpoints::{QueryParams, ToQuery};
use crate::error::Result;
use crate::models::{Dimension, DimensionsQuery, LookupOptions};
use crate::query_params;

const PATH: &str = "dimensions";

impl ToQuery for DimensionsQuery {
    fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        query_params! { params =>
            "rsid" => required &self.rsid,
            "locale" => optional &self.locale,
            "segmentable" => flag self.segmentable,
            "reportable" => flag self.reportable,
            "classifiable" => flag self.classifiable,
            "expansion" => list &self.expansion,
        }
        params
    }
}

/// Dimensions of a report suite.
///
/// These endpoints are not paged; every call returns the full list.
#[derive(Debug, Clone, Copy)]
pub struct DimensionsService<'a> {
    client: &'a AnalyticsClient,
}

impl<'a> DimensionsService<'a> {
    pub(crate) fn new(client: &'a AnalyticsClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self, query: &DimensionsQuery) -> Result<Vec<Dimension>> {
        self.client.list(PATH, query).await
    }

    /// Fetch one dimension of report suite `rsid`.
    pub async fn get_by_id(&self, rsid: &str, id: &str, options: &LookupOptions) -> Result<Dimension> {
        let params = options.to_query().required("rsid", rsid);
        self.client.fetch(PATH, id, &params).await
    }
}
