//! Report suite collection API methods.

use crate::client::AnalyticsClient;
use crate::endpoints::{QueryParams, ToQuery};
use crate::error::Result;
use crate::models::{Collection, CollectionsQuery, Page};
use crate::query_params;

const PATH: &str = "collections/suites";

impl ToQuery for CollectionsQuery {
    fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        query_params! { params =>
            "rsids" => optional &self.rsids,
            "rsidContains" => optional &self.rsid_contains,
            "limit" => required self.limit,
            "page" => required self.page,
            "expansion" => list &self.expansion,
        }
        params
    }
}

/// Report suites visible to the caller.
#[derive(Debug, Clone, Copy)]
pub struct CollectionsService<'a> {
    client: &'a AnalyticsClient,
}

impl<'a> CollectionsService<'a> {
    pub(crate) fn new(client: &'a AnalyticsClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self, query: &CollectionsQuery) -> Result<Page<Collection>> {
        self.client.list(PATH, query).await
    }

    /// Fetch one report suite by its rsid.
    pub async fn get_by_id(&self, id: &str, expansion: &[String]) -> Result<Collection> {
        let params = QueryParams::new().list("expansion", expansion);
        self.client.fetch(PATH, id, &params).await
    }
}
