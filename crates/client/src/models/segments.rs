//! Segment models.

use serde::{Deserialize, Serialize};

use crate::models::common::{Owner, Tag};
use crate::serde_helpers::null_as_default;

/// The value a segment predicate tests against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentPredicateValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub func: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentPredicate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub val: Option<SegmentPredicateValue>,
    /// Literal compared against the value.
    #[serde(rename = "str", default, skip_serializing_if = "Option::is_none")]
    pub literal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub func: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentContainer {
    /// `hits`, `visits` or `visitors`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub func: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pred: Option<SegmentPredicate>,
}

/// Segment rule tree.
///
/// The same shape is used inside report requests to filter inline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<SegmentContainer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub func: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub version: Vec<i32>,
}

/// Result of validating a segment against the products it is used in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentCompatibility {
    #[serde(default)]
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, alias = "validatorVersion", skip_serializing_if = "Option::is_none")]
    pub validator_version: Option<String>,
    #[serde(
        default,
        alias = "supportedProducts",
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub supported_products: Vec<String>,
    #[serde(
        default,
        alias = "supportedSchema",
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub supported_schema: Vec<String>,
    #[serde(
        default,
        alias = "supportedFeatures",
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub supported_features: Vec<String>,
}

/// A saved segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
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
    pub definition: Option<SegmentDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<SegmentCompatibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition_last_modified: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

/// Filters for listing segments.
///
/// Unlike the other list operations, `rsids` is always sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentsQuery {
    /// Comma-separated report suite ids.
    pub rsids: String,
    /// Comma-separated segment ids.
    pub segment_filter: String,
    pub locale: String,
    pub name: String,
    /// Comma-separated tag names.
    pub tag_names: String,
    /// `"true"`, `"false"` or `"all"`.
    pub filter_by_published_segments: String,
    pub limit: i64,
    pub page: i64,
    pub sort_direction: String,
    pub sort_property: String,
    pub expansion: Vec<String>,
    pub include_type: Vec<String>,
}
