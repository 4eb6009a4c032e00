use crate::domain::entities::{GamingSession, SessionFilter, SessionStats};
use crate::infrastructure::http::middleware::{ApiQuery, ApiResult, AppState};
use crate::shared::{parse_filter, parse_limit, Listing};
use axum::{extract::State, Json};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SessionListQuery {
    pub status: Option<String>,
    pub limit: Option<String>,
}

pub async fn list_sessions(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SessionListQuery>,
) -> ApiResult<Json<Listing<GamingSession, SessionStats>>> {
    let filter = SessionFilter {
        status: parse_filter("status", query.status.as_deref())?,
        limit: parse_limit(query.limit.as_deref())?,
    };
    Ok(Json(state.gaming_session_service.list(&filter).await?))
}
