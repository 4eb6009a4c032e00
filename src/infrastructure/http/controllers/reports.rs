use crate::domain::entities::{
    Report, ReportFilter, ReportStats, ReportStatus, RespondToReportRequest,
    UpdateReportStatusRequest,
};
use crate::infrastructure::http::controllers::parse_field;
use crate::infrastructure::http::middleware::{
    ApiJson, ApiPath, ApiQuery, ApiResult, AppState, AuthenticatedAdmin,
};
use crate::shared::{parse_filter, parse_limit, DataResponse, Listing};
use axum::{extract::State, Extension, Json};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ReportListQuery {
    pub status: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub limit: Option<String>,
}

impl ReportListQuery {
    fn into_filter(self) -> ApiResult<ReportFilter> {
        Ok(ReportFilter {
            status: parse_filter("status", self.status.as_deref())?,
            category: parse_filter("category", self.category.as_deref())?,
            priority: parse_filter("priority", self.priority.as_deref())?,
            limit: parse_limit(self.limit.as_deref())?,
        })
    }
}

pub async fn list_reports(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ReportListQuery>,
) -> ApiResult<Json<Listing<Report, ReportStats>>> {
    let filter = query.into_filter()?;
    Ok(Json(state.report_service.list(&filter).await?))
}

pub async fn update_report_status(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(request): ApiJson<UpdateReportStatusRequest>,
) -> ApiResult<Json<DataResponse<Report>>> {
    let status: ReportStatus = parse_field(&request.status)?;
    let report = state.report_service.update_status(&id, status).await?;
    Ok(Json(DataResponse::new(report)))
}

pub async fn respond_to_report(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedAdmin>,
    ApiPath(id): ApiPath<String>,
    ApiJson(request): ApiJson<RespondToReportRequest>,
) -> ApiResult<Json<DataResponse<Report>>> {
    let status = request
        .status
        .as_deref()
        .map(parse_field::<ReportStatus>)
        .transpose()?;
    let report = state
        .report_service
        .respond(&id, &request.response, admin.id(), status)
        .await?;
    Ok(Json(DataResponse::new(report)))
}
