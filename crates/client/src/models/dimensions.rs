//! Dimension models.

use serde::{Deserialize, Serialize};

use crate::models::common::Tag;
use crate::serde_helpers::null_as_default;

/// A dimension available in a report suite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub dimension_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub support: Vec<String>,
    #[serde(default)]
    pub pathable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_title_info: Option<String>,
    #[serde(default)]
    pub segmentable: bool,
    /// Report types this dimension can be used in.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub reportable: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub allowed_for_reporting: bool,
    #[serde(default)]
    pub none_settings: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

/// Filters for listing the dimensions of a report suite.
///
/// `rsid` is always sent, even when empty; the API rejects the request
/// without it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionsQuery {
    pub rsid: String,
    pub locale: String,
    pub segmentable: bool,
    pub reportable: bool,
    pub classifiable: bool,
    pub expansion: Vec<String>,
}
