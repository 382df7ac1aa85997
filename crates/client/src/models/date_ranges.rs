//! Date range models.

use serde::{Deserialize, Serialize};

use crate::models::common::{Owner, Tag};

/// A saved date range.
///
/// `definition` is kept as raw JSON; its shape varies between preset and
/// custom ranges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_suite_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

/// Filters for listing date ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRangesQuery {
    pub locale: String,
    /// Comma-separated date range ids.
    pub filter_by_ids: String,
    pub limit: i64,
    pub page: i64,
    pub expansion: Vec<String>,
    pub include_type: Vec<String>,
}
