use crate::domain::entities::{GamingSession, SessionFilter, SessionStats};
use crate::infrastructure::http::middleware::error::ApiResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait GamingSessionRepository: Send + Sync {
    async fn create_session(&self, session: &GamingSession) -> ApiResult<()>;
    async fn get_session_by_id(&self, id: &str) -> ApiResult<Option<GamingSession>>;
    async fn list_sessions(&self, filter: &SessionFilter) -> ApiResult<Vec<GamingSession>>;
    async fn session_stats(&self) -> ApiResult<SessionStats>;
    /// Moves every `active` session of the user to `terminated`, stamping
    /// `ended_at`. Returns the number of sessions changed.
    async fn terminate_active_sessions_for_user(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> ApiResult<u64>;
    /// Completed or terminated sessions whose start falls in `[start, end)`.
    async fn count_finished_sessions_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ApiResult<i64>;
}
