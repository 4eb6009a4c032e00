use crate::domain::entities::{GamingSession, SessionFilter, SessionStats};
use crate::domain::ports::gaming_session_repository::GamingSessionRepository;
use crate::infrastructure::http::middleware::error::ApiResult;
use crate::infrastructure::persistence::{
    get_enum, get_optional_timestamp, get_timestamp, Database,
};
use crate::shared::{format_timestamp, sql_limit};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{any::AnyRow, Row};

const SESSION_COLUMNS: &str =
    "id, user_id, station_id, status, started_at, ended_at, amount, created_at, updated_at";

fn row_to_session(row: &AnyRow) -> ApiResult<GamingSession> {
    Ok(GamingSession {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        station_id: row.try_get("station_id")?,
        status: get_enum(row, "status")?,
        started_at: get_timestamp(row, "started_at")?,
        ended_at: get_optional_timestamp(row, "ended_at")?,
        amount: row.try_get("amount")?,
        created_at: get_timestamp(row, "created_at")?,
        updated_at: get_timestamp(row, "updated_at")?,
    })
}

#[async_trait]
impl GamingSessionRepository for Database {
    async fn create_session(&self, session: &GamingSession) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO gaming_sessions (id, user_id, station_id, status, started_at, ended_at,
                                          amount, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&session.id)
        .bind(&session.user_id)
        .bind(&session.station_id)
        .bind(session.status.as_str())
        .bind(format_timestamp(session.started_at))
        .bind(session.ended_at.map(format_timestamp))
        .bind(session.amount)
        .bind(format_timestamp(session.created_at))
        .bind(format_timestamp(session.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_session_by_id(&self, id: &str) -> ApiResult<Option<GamingSession>> {
        let query = format!("SELECT {} FROM gaming_sessions WHERE id = ?", SESSION_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_session).transpose()
    }

    async fn list_sessions(&self, filter: &SessionFilter) -> ApiResult<Vec<GamingSession>> {
        let where_clause = if filter.status.is_some() {
            "WHERE status = ?"
        } else {
            ""
        };
        let query = format!(
            "SELECT {} FROM gaming_sessions {} ORDER BY started_at DESC LIMIT ?",
            SESSION_COLUMNS, where_clause
        );

        let mut q = sqlx::query(&query);
        if let Some(status) = filter.status {
            q = q.bind(status.as_str());
        }
        let rows = q.bind(sql_limit(filter.limit)).fetch_all(&self.pool).await?;

        rows.iter().map(row_to_session).collect()
    }

    async fn session_stats(&self) -> ApiResult<SessionStats> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS total,
                    COALESCE(SUM(CASE WHEN status = 'active' THEN 1 ELSE 0 END), 0) AS active,
                    COALESCE(SUM(CASE WHEN status = 'paused' THEN 1 ELSE 0 END), 0) AS paused,
                    COALESCE(SUM(CASE WHEN status = 'completed' THEN 1 ELSE 0 END), 0) AS completed,
                    COALESCE(SUM(CASE WHEN status = 'terminated' THEN 1 ELSE 0 END), 0) AS terminated
             FROM gaming_sessions",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(SessionStats {
            total: row.try_get("total")?,
            active: row.try_get("active")?,
            paused: row.try_get("paused")?,
            completed: row.try_get("completed")?,
            terminated: row.try_get("terminated")?,
        })
    }

    async fn terminate_active_sessions_for_user(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> ApiResult<u64> {
        let now = format_timestamp(now);
        let result = sqlx::query(
            "UPDATE gaming_sessions
             SET status = 'terminated', ended_at = ?, updated_at = ?
             WHERE user_id = ? AND status = 'active'",
        )
        .bind(&now)
        .bind(&now)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn count_finished_sessions_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ApiResult<i64> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS count FROM gaming_sessions
             WHERE status IN ('completed', 'terminated')
               AND started_at >= ? AND started_at < ?",
        )
        .bind(format_timestamp(start))
        .bind(format_timestamp(end))
        .fetch_one(&self.pool)
        .await?;

        Ok(row.try_get("count")?)
    }
}
