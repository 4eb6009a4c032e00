use crate::domain::entities::{Report, ReportFilter, ReportStats, ReportStatus};
use crate::infrastructure::http::middleware::error::ApiResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn create_report(&self, report: &Report) -> ApiResult<()>;
    async fn get_report_by_id(&self, id: &str) -> ApiResult<Option<Report>>;
    async fn list_reports(&self, filter: &ReportFilter) -> ApiResult<Vec<Report>>;
    async fn report_stats(&self) -> ApiResult<ReportStats>;
    async fn update_report_status(
        &self,
        id: &str,
        status: ReportStatus,
        now: DateTime<Utc>,
    ) -> ApiResult<bool>;
    async fn record_report_response(
        &self,
        id: &str,
        response: &str,
        responded_by: &str,
        status: ReportStatus,
        now: DateTime<Utc>,
    ) -> ApiResult<bool>;
}
