//! Report suite collection models.

use serde::{Deserialize, Serialize};

/// Calendar settings of a report suite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionCalendarType {
    #[serde(rename = "rsid", default, skip_serializing_if = "Option::is_none")]
    pub report_suite_id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub calendar_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_date: Option<String>,
}

/// A report suite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone_zone_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_rsid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_item_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_type: Option<CollectionCalendarType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsid: Option<String>,
}

/// Filters for listing report suites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionsQuery {
    /// Comma-separated report suite ids.
    pub rsids: String,
    /// Only suites whose id contains this text.
    pub rsid_contains: String,
    pub limit: i64,
    pub page: i64,
    pub expansion: Vec<String>,
}
