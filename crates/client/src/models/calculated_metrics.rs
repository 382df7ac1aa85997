//! Calculated metric models.

use serde::{Deserialize, Serialize};

use crate::models::common::{Owner, Tag};

/// A calculated metric definition.
///
/// `definition` is the formula tree exactly as the API returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedMetric {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "rsid", default, skip_serializing_if = "Option::is_none")]
    pub report_suite_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_suite_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polarity: Option<String>,
    #[serde(default)]
    pub precision: i32,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub metric_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub favorite: bool,
}

/// Filters for listing calculated metrics.
///
/// Empty strings and lists are left out of the request; `favorite`,
/// `approved`, `limit` and `page` are always sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatedMetricsQuery {
    /// Comma-separated report suite ids.
    pub rsids: String,
    /// Comma-separated owner ids.
    pub owner_id: String,
    /// Comma-separated calculated metric ids.
    pub filter_by_ids: String,
    pub to_be_used_in_rsid: String,
    pub locale: String,
    pub name: String,
    /// Comma-separated tag names.
    pub tag_names: String,
    pub favorite: bool,
    pub approved: bool,
    pub limit: i64,
    pub page: i64,
    pub sort_direction: String,
    pub sort_property: String,
    pub expansion: Vec<String>,
    pub include_type: Vec<String>,
}
