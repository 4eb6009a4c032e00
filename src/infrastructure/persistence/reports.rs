use crate::domain::entities::{Report, ReportFilter, ReportStats, ReportStatus};
use crate::domain::ports::report_repository::ReportRepository;
use crate::infrastructure::http::middleware::error::ApiResult;
use crate::infrastructure::persistence::{
    get_enum, get_optional_timestamp, get_timestamp, Database,
};
use crate::shared::{format_timestamp, sql_limit};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{any::AnyRow, Row};

const REPORT_COLUMNS: &str = "id, user_id, subject, description, category, priority, status, \
     admin_response, responded_by, responded_at, created_at, updated_at";

fn row_to_report(row: &AnyRow) -> ApiResult<Report> {
    Ok(Report {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        subject: row.try_get("subject")?,
        description: row.try_get("description")?,
        category: get_enum(row, "category")?,
        priority: get_enum(row, "priority")?,
        status: get_enum(row, "status")?,
        admin_response: row.try_get("admin_response")?,
        responded_by: row.try_get("responded_by")?,
        responded_at: get_optional_timestamp(row, "responded_at")?,
        created_at: get_timestamp(row, "created_at")?,
        updated_at: get_timestamp(row, "updated_at")?,
    })
}

#[async_trait]
impl ReportRepository for Database {
    async fn create_report(&self, report: &Report) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO reports (id, user_id, subject, description, category, priority, status,
                                  admin_response, responded_by, responded_at, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&report.id)
        .bind(&report.user_id)
        .bind(&report.subject)
        .bind(&report.description)
        .bind(report.category.as_str())
        .bind(report.priority.as_str())
        .bind(report.status.as_str())
        .bind(&report.admin_response)
        .bind(&report.responded_by)
        .bind(report.responded_at.map(format_timestamp))
        .bind(format_timestamp(report.created_at))
        .bind(format_timestamp(report.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_report_by_id(&self, id: &str) -> ApiResult<Option<Report>> {
        let query = format!("SELECT {} FROM reports WHERE id = ?", REPORT_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_report).transpose()
    }

    async fn list_reports(&self, filter: &ReportFilter) -> ApiResult<Vec<Report>> {
        let mut conditions = Vec::new();
        let mut params: Vec<&'static str> = Vec::new();
        if let Some(status) = filter.status {
            conditions.push("status = ?");
            params.push(status.as_str());
        }
        if let Some(category) = filter.category {
            conditions.push("category = ?");
            params.push(category.as_str());
        }
        if let Some(priority) = filter.priority {
            conditions.push("priority = ?");
            params.push(priority.as_str());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let query = format!(
            "SELECT {} FROM reports {} ORDER BY created_at DESC LIMIT ?",
            REPORT_COLUMNS, where_clause
        );

        let mut q = sqlx::query(&query);
        for param in params {
            q = q.bind(param);
        }
        let rows = q.bind(sql_limit(filter.limit)).fetch_all(&self.pool).await?;

        rows.iter().map(row_to_report).collect()
    }

    async fn report_stats(&self) -> ApiResult<ReportStats> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS total,
                    COALESCE(SUM(CASE WHEN status = 'pending' THEN 1 ELSE 0 END), 0) AS pending,
                    COALESCE(SUM(CASE WHEN status = 'in_progress' THEN 1 ELSE 0 END), 0) AS in_progress,
                    COALESCE(SUM(CASE WHEN status = 'resolved' THEN 1 ELSE 0 END), 0) AS resolved,
                    COALESCE(SUM(CASE WHEN status = 'closed' THEN 1 ELSE 0 END), 0) AS closed
             FROM reports",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(ReportStats {
            total: row.try_get("total")?,
            pending: row.try_get("pending")?,
            in_progress: row.try_get("in_progress")?,
            resolved: row.try_get("resolved")?,
            closed: row.try_get("closed")?,
        })
    }

    async fn update_report_status(
        &self,
        id: &str,
        status: ReportStatus,
        now: DateTime<Utc>,
    ) -> ApiResult<bool> {
        let result = sqlx::query("UPDATE reports SET status = ?, updated_at = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(format_timestamp(now))
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn record_report_response(
        &self,
        id: &str,
        response: &str,
        responded_by: &str,
        status: ReportStatus,
        now: DateTime<Utc>,
    ) -> ApiResult<bool> {
        let now = format_timestamp(now);
        let result = sqlx::query(
            "UPDATE reports
             SET admin_response = ?, responded_by = ?, responded_at = ?, status = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(response)
        .bind(responded_by)
        .bind(&now)
        .bind(status.as_str())
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
