//! Ranked report request and response models.
//!
//! A [`RankedRequest`] names one dimension to break down, the metrics to
//! compute per item and the filters (date range, segments, items) to apply.
//! The response carries one [`RankedReportRow`] per dimension item with a
//! value per metric column.

use serde::{Deserialize, Serialize};

use crate::models::segments::SegmentDefinition;
use crate::serde_helpers::{is_false, null_as_default};

/// Locale used to render item names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportLocale {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension_keys: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unicode_locale_attributes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unicode_locale_keys: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso3_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso3_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_script: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// A filter applied globally, to a metric column or to a row.
///
/// `filter_type` selects which of the other fields are meaningful:
/// `dateRange`, `breakdown`, `segment` or `excludeItemIds`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub filter_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub item_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_definition: Option<SegmentDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_item_ids: Vec<String>,
}

impl ReportFilter {
    /// A `dateRange` filter over an ISO 8601 interval such as
    /// `2020-04-01T00:00:00/2020-04-02T00:00:00`.
    pub fn date_range(range: impl Into<String>) -> Self {
        Self {
            filter_type: Some("dateRange".to_string()),
            date_range: Some(range.into()),
            ..Default::default()
        }
    }

    /// A `segment` filter referencing a saved segment.
    pub fn segment(segment_id: impl Into<String>) -> Self {
        Self {
            filter_type: Some("segment".to_string()),
            segment_id: Some(segment_id.into()),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Item search applied to the dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSearch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clause: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_item_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub item_ids: Vec<String>,
    #[serde(default)]
    pub include_search_total: bool,
    #[serde(default)]
    pub empty: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStatistics {
    /// `col-max`, `col-min`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<String>,
    #[serde(default)]
    pub ignore_zeroes: bool,
}

/// Paging and presentation settings.
///
/// `limit` and `page` are always sent. The boolean switches are sent only
/// when turned on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSettings {
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub page: i64,
    /// `asc` or `desc`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_sort: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub count_repeat_instances: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub reflect_request: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub include_anomaly_detection: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub include_percent_change: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub include_lat_long: bool,
    /// `exclude-nones` or `return-nones`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nones_behavior: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictiveSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anomaly_confidence: Option<f64>,
}

/// One metric column of the report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetric {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_id: Option<String>,
    /// Ids of entries in [`ReportMetrics::metric_filters`] applied to this column.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predictive: Option<PredictiveSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetrics {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metric_filters: Vec<ReportFilter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<ReportMetric>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRows {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub row_filters: Vec<ReportFilter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<ReportRow>,
}

/// Body of a ranked report run.
///
/// `rsid` and `dimension` are always serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedRequest {
    #[serde(rename = "rsid", default)]
    pub report_suite_id: String,
    #[serde(default)]
    pub dimension: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<ReportLocale>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_filters: Vec<ReportFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<ReportSearch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<ReportSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ReportStatistics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_container: Option<ReportMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_container: Option<ReportRows>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_date: Option<String>,
}

impl RankedRequest {
    pub fn new(report_suite_id: impl Into<String>, dimension: impl Into<String>) -> Self {
        Self {
            report_suite_id: report_suite_id.into(),
            dimension: dimension.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDimension {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub dimension_type: Option<String>,
}

/// A metric column the API could not compute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportColumnError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportColumns {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<ReportDimension>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub column_ids: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub column_errors: Vec<ReportColumnError>,
}

/// One dimension item and its metric values, in column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedReportRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<f64>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub data_expected: Vec<f64>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub data_upper_bound: Vec<f64>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub data_lower_bound: Vec<f64>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub data_anomaly_detected: Vec<bool>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub percent_change: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Column totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub filtered_totals: Vec<f64>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub totals: Vec<f64>,
}

/// Result of a ranked report run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedReportData {
    #[serde(default)]
    pub total_pages: i64,
    #[serde(default)]
    pub first_page: bool,
    #[serde(default)]
    pub last_page: bool,
    #[serde(default)]
    pub number_of_elements: i64,
    #[serde(default)]
    pub number: i64,
    #[serde(default)]
    pub total_elements: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Echo of the request, present when `reflectRequest` was set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<RankedRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<ReportColumns>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rows: Vec<RankedReportRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_data: Option<ReportSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_request_always_carries_rsid_and_dimension() {
        let request = RankedRequest::default();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"rsid": "", "dimension": ""})
        );
    }

    #[test]
    fn test_settings_omit_false_switches() {
        let settings = ReportSettings {
            limit: 400,
            page: 0,
            dimension_sort: Some("asc".to_string()),
            count_repeat_instances: true,
            nones_behavior: Some("exclude-nones".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&settings).unwrap(),
            json!({
                "limit": 400,
                "page": 0,
                "dimensionSort": "asc",
                "countRepeatInstances": true,
                "nonesBehavior": "exclude-nones"
            })
        );
    }

    #[test]
    fn test_search_and_statistics_keep_flags() {
        assert_eq!(
            serde_json::to_value(ReportSearch::default()).unwrap(),
            json!({"includeSearchTotal": false, "empty": false})
        );
        assert_eq!(
            serde_json::to_value(ReportStatistics::default()).unwrap(),
            json!({"ignoreZeroes": false})
        );
    }

    #[test]
    fn test_date_range_filter() {
        let filter = ReportFilter::date_range("2020-04-01T00:00:00/2020-04-02T00:00:00").with_id("0");
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({
                "id": "0",
                "type": "dateRange",
                "dateRange": "2020-04-01T00:00:00/2020-04-02T00:00:00"
            })
        );
    }

    #[test]
    fn test_inline_segment_filter() {
        let filter = ReportFilter {
            filter_type: Some("segment".to_string()),
            segment_definition: Some(SegmentDefinition {
                func: Some("segment".to_string()),
                version: vec![1, 0, 0],
                ..Default::default()
            }),
            ..Default::default()
        };
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(value["segmentDefinition"]["version"], json!([1, 0, 0]));
    }

    #[test]
    fn test_deserialize_report_data() {
        let json = r#"{
            "totalPages": 1,
            "firstPage": true,
            "lastPage": true,
            "numberOfElements": 2,
            "number": 0,
            "totalElements": 2,
            "columns": {
                "dimension": {"id": "variables/daterangeday", "type": "time"},
                "columnIds": ["0"],
                "columnErrors": [{"columnId": "1", "errorCode": "invalid_metric", "errorDescription": "bad"}]
            },
            "rows": [
                {"itemId": "1200301", "value": "Apr 1, 2020", "data": [1520.0]},
                {"itemId": "1200302", "value": "Apr 2, 2020", "data": [980.5], "dataAnomalyDetected": [false]}
            ],
            "summaryData": {"filteredTotals": [2500.5], "totals": [2500.5]}
        }"#;
        let data: RankedReportData = serde_json::from_str(json).unwrap();
        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.rows[1].data, vec![980.5]);
        assert_eq!(data.rows[1].data_anomaly_detected, vec![false]);
        let columns = data.columns.unwrap();
        assert_eq!(columns.dimension.unwrap().dimension_type.as_deref(), Some("time"));
        assert_eq!(columns.column_errors[0].error_code.as_deref(), Some("invalid_metric"));
        assert_eq!(data.summary_data.unwrap().totals, vec![2500.5]);
    }
}
