//! Date range API methods.

use crate::client::AnalyticsClient;
use crate::endpoints::{QueryParams, ToQuery};
use crate::error::Result;
use crate::models::{DateRange, DateRangesQuery, LookupOptions, Page};
use crate::query_params;

const PATH: &str = "dateranges";

impl ToQuery for DateRangesQuery {
    fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        query_params! { params =>
            "locale" => optional &self.locale,
            "filterByIds" => optional &self.filter_by_ids,
            "limit" => required self.limit,
            "page" => required self.page,
            "expansion" => list &self.expansion,
            "includeType" => list &self.include_type,
        }
        params
    }
}

/// Saved date ranges.
#[derive(Debug, Clone, Copy)]
pub struct DateRangesService<'a> {
    client: &'a AnalyticsClient,
}

impl<'a> DateRangesService<'a> {
    pub(crate) fn new(client: &'a AnalyticsClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self, query: &DateRangesQuery) -> Result<Page<DateRange>> {
        self.client.list(PATH, query).await
    }

    pub async fn get_by_id(&self, id: &str, options: &LookupOptions) -> Result<DateRange> {
        self.client.fetch(PATH, id, options).await
    }
}
