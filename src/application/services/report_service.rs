use crate::domain::entities::{Report, ReportFilter, ReportStats, ReportStatus};
use crate::domain::errors::DomainError;
use crate::domain::ports::report_repository::ReportRepository;
use crate::domain::ports::time_service::TimeService;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::shared::listing::Listing;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReportService {
    report_repo: Arc<dyn ReportRepository>,
    clock: Arc<dyn TimeService>,
}

impl ReportService {
    pub fn new(report_repo: Arc<dyn ReportRepository>, clock: Arc<dyn TimeService>) -> Self {
        Self { report_repo, clock }
    }

    pub async fn list(&self, filter: &ReportFilter) -> ApiResult<Listing<Report, ReportStats>> {
        let reports = self.report_repo.list_reports(filter).await?;
        let stats = self.report_repo.report_stats().await?;
        Ok(Listing::new(reports, stats))
    }

    pub async fn update_status(&self, id: &str, status: ReportStatus) -> ApiResult<Report> {
        if !self
            .report_repo
            .update_report_status(id, status, self.clock.now())
            .await?
        {
            return Err(report_not_found());
        }
        tracing::info!("Report {} moved to {}", id, status);
        self.fetch(id).await
    }

    /// Records a staff answer. Without an explicit status a pending report
    /// moves to `in_progress`; other statuses are kept.
    pub async fn respond(
        &self,
        id: &str,
        response: &str,
        responded_by: &str,
        status: Option<ReportStatus>,
    ) -> ApiResult<Report> {
        let response = response.trim();
        if response.is_empty() {
            return Err(DomainError::ValidationError("Response text is required".to_string()).into());
        }

        let current = self.fetch(id).await?;
        let status = status.unwrap_or(match current.status {
            ReportStatus::Pending => ReportStatus::InProgress,
            other => other,
        });

        if !self
            .report_repo
            .record_report_response(id, response, responded_by, status, self.clock.now())
            .await?
        {
            return Err(report_not_found());
        }
        self.fetch(id).await
    }

    async fn fetch(&self, id: &str) -> ApiResult<Report> {
        self.report_repo
            .get_report_by_id(id)
            .await?
            .ok_or_else(report_not_found)
    }
}

fn report_not_found() -> ApiError {
    ApiError::NotFound("Report not found".to_string())
}
