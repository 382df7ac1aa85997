//! Segment API methods.

use crate::client::AnalyticsClient;
use crate::endpoints::{QueryParams, ToQuery};
use crate::error::Result;
use crate::models::{LookupOptions, Page, Segment, SegmentsQuery};
use crate::query_params;

const PATH: &str = "segments";

impl ToQuery for SegmentsQuery {
    fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        query_params! { params =>
            "rsids" => required &self.rsids,
            "segmentFilter" => optional &self.segment_filter,
            "locale" => optional &self.locale,
            "name" => optional &self.name,
            "tagNames" => optional &self.tag_names,
            "filterByPublishedSegments" => optional &self.filter_by_published_segments,
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

#[derive(Debug, Clone, Copy)]
pub struct SegmentsService<'a> {
    client: &'a AnalyticsClient,
}

impl<'a> SegmentsService<'a> {
    pub(crate) fn new(client: &'a AnalyticsClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self, query: &SegmentsQuery) -> Result<Page<Segment>> {
        self.client.list(PATH, query).await
    }

    pub async fn get_by_id(&self, id: &str, options: &LookupOptions) -> Result<Segment> {
        self.client.fetch(PATH, id, options).await
    }
}
