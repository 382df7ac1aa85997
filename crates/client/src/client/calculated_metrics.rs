//! Calculated metrics API methods.

use crate::client::AnalyticsClient;
use crate::endpoints::{QueryParams, ToQuery};
use crate::error::Result;
use crate::models::{CalculatedMetric, CalculatedMetricsQuery, LookupOptions, Page};
use crate::query_params;

const PATH: &str = "calculatedmetrics";

impl ToQuery for CalculatedMetricsQuery {
    fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        query_params! { params =>
            "rsids" => optional &self.rsids,
            "ownerId" => optional &self.owner_id,
            "filterByIds" => optional &self.filter_by_ids,
            "toBeUsedInRsid" => optional &self.to_be_used_in_rsid,
            "locale" => optional &self.locale,
            "name" => optional &self.name,
            "tagNames" => optional &self.tag_names,
            "favorite" => flag self.favorite,
            "approved" => flag self.approved,
            "limit" => required self.limit,
            "page" => required self.page,
            "sortDirection" => optional &self.sort_direction,
            "sortProperty" => optional &self.sort_property,
            "expansion" => list &self.expansion,
            "includeType" => list &self.include_type,
        }
        params
    }
}

/// Calculated metrics of the company.
#[derive(Debug, Clone, Copy)]
pub struct CalculatedMetricsService<'a> {
    client: &'a AnalyticsClient,
}

impl<'a> CalculatedMetricsService<'a> {
    pub(crate) fn new(client: &'a AnalyticsClient) -> Self {
        Self { client }
    }

    /// List calculated metrics matching `query`.
    pub async fn get_all(&self, query: &CalculatedMetricsQuery) -> Result<Page<CalculatedMetric>> {
        self.client.list(PATH, query).await
    }

    /// Fetch one calculated metric by id.
    pub async fn get_by_id(&self, id: &str, options: &LookupOptions) -> Result<CalculatedMetric> {
        self.client.fetch(PATH, id, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_sends_only_flags_and_paging() {
        let params = CalculatedMetricsQuery::default().to_query();
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["approved", "favorite", "limit", "page"]);
        assert_eq!(params.get("approved"), Some("false"));
        assert_eq!(params.get("limit"), Some("0"));
    }

    #[test]
    fn test_full_query_sends_every_key_once() {
        let query = CalculatedMetricsQuery {
            rsids: "rsid1,rsid2".to_string(),
            owner_id: "622291".to_string(),
            filter_by_ids: "cm1,cm2".to_string(),
            to_be_used_in_rsid: "rsid1".to_string(),
            locale: "en_US".to_string(),
            name: "bounce".to_string(),
            tag_names: "kpi".to_string(),
            favorite: true,
            approved: true,
            limit: 10,
            page: 2,
            sort_direction: "DESC".to_string(),
            sort_property: "modified_date".to_string(),
            expansion: vec!["tags".to_string(), "definition".to_string()],
            include_type: vec!["shared".to_string(), "all".to_string()],
        };
        let params = query.to_query();
        assert_eq!(params.len(), 15);
        assert_eq!(params.get("rsids"), Some("rsid1,rsid2"));
        assert_eq!(params.get("ownerId"), Some("622291"));
        assert_eq!(params.get("toBeUsedInRsid"), Some("rsid1"));
        assert_eq!(params.get("favorite"), Some("true"));
        assert_eq!(params.get("page"), Some("2"));
        assert_eq!(params.get("sortProperty"), Some("modified_date"));
        assert_eq!(params.get("expansion"), Some("tags,definition"));
        assert_eq!(params.get("includeType"), Some("shared,all"));
    }
}
