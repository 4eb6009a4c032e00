use crate::domain::entities::{AnalyticsQuery, AnalyticsSummary};
use crate::infrastructure::http::middleware::{ApiQuery, ApiResult, AppState};
use crate::shared::DataResponse;
use axum::{extract::State, Json};

pub async fn get_analytics(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<AnalyticsQuery>,
) -> ApiResult<Json<DataResponse<AnalyticsSummary>>> {
    let summary = state.analytics_service.summary(&query).await?;
    Ok(Json(DataResponse::new(summary)))
}
