//! Data models for Analytics API requests and responses.
//!
//! Types are organized by resource in submodules and re-exported here.
//! Every entity is a plain data-transfer object: optional strings are
//! `Option<String>` and omitted when `None`, always-present booleans and
//! integers decode to their default when absent.

pub mod calculated_metrics;
pub mod collections;
pub mod common;
pub mod date_ranges;
pub mod dimensions;
pub mod metrics;
pub mod reports;
pub mod segments;
pub mod users;

pub use calculated_metrics::{CalculatedMetric, CalculatedMetricsQuery};
pub use collections::{Collection, CollectionCalendarType, CollectionsQuery};
pub use common::{LookupOptions, Owner, Page, Sort, Tag, TaggedComponent};
pub use date_ranges::{DateRange, DateRangesQuery};
pub use dimensions::{Dimension, DimensionsQuery};
pub use metrics::{Metric, MetricsQuery};
pub use reports::{
    PredictiveSettings, RankedReportData, RankedReportRow, RankedRequest, ReportColumnError,
    ReportColumns, ReportDimension, ReportFilter, ReportLocale, ReportMetric, ReportMetrics,
    ReportRow, ReportRows, ReportSearch, ReportSettings, ReportStatistics, ReportSummary,
};
pub use segments::{
    Segment, SegmentCompatibility, SegmentContainer, SegmentDefinition, SegmentPredicate,
    SegmentPredicateValue, SegmentsQuery,
};
pub use users::User;
