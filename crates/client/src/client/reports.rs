//! Ranked report API methods.

use crate::client::AnalyticsClient;
use crate::error::Result;
use crate::models::{RankedReportData, RankedRequest};

const PATH: &str = "reports";

/// Runs ranked reports.
///
/// The request body is sent exactly as serialized; unset optional fields are
/// omitted rather than sent as `null`.
#[derive(Debug, Clone, Copy)]
pub struct ReportsService<'a> {
    client: &'a AnalyticsClient,
}

impl<'a> ReportsService<'a> {
    pub(crate) fn new(client: &'a AnalyticsClient) -> Self {
        Self { client }
    }

    pub async fn run(&self, request: &RankedRequest) -> Result<RankedReportData> {
        self.client.post(PATH, request).await
    }
}
