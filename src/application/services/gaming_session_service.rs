use crate::domain::entities::{GamingSession, SessionFilter, SessionStats};
use crate::domain::ports::gaming_session_repository::GamingSessionRepository;
use crate::infrastructure::http::middleware::error::ApiResult;
use crate::shared::listing::Listing;
use std::sync::Arc;

#[derive(Clone)]
pub struct GamingSessionService {
    session_repo: Arc<dyn GamingSessionRepository>,
}

impl GamingSessionService {
    pub fn new(session_repo: Arc<dyn GamingSessionRepository>) -> Self {
        Self { session_repo }
    }

    pub async fn list(
        &self,
        filter: &SessionFilter,
    ) -> ApiResult<Listing<GamingSession, SessionStats>> {
        let sessions = self.session_repo.list_sessions(filter).await?;
        let stats = self.session_repo.session_stats().await?;
        Ok(Listing::new(sessions, stats))
    }
}
