use crate::domain::entities::{
    Station, StationFilter, StationStats, StationStatus, UpdateStationStatusRequest,
};
use crate::infrastructure::http::controllers::parse_field;
use crate::infrastructure::http::middleware::{ApiJson, ApiPath, ApiQuery, ApiResult, AppState};
use crate::shared::{parse_filter, parse_limit, DataResponse, Listing};
use axum::{extract::State, Json};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct StationListQuery {
    pub status: Option<String>,
    pub station_type: Option<String>,
    pub limit: Option<String>,
}

pub async fn list_stations(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<StationListQuery>,
) -> ApiResult<Json<Listing<Station, StationStats>>> {
    let filter = StationFilter {
        status: parse_filter("status", query.status.as_deref())?,
        station_type: parse_filter("station_type", query.station_type.as_deref())?,
        limit: parse_limit(query.limit.as_deref())?,
    };
    Ok(Json(state.station_service.list(&filter).await?))
}

pub async fn update_station_status(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(request): ApiJson<UpdateStationStatusRequest>,
) -> ApiResult<Json<DataResponse<Station>>> {
    let status: StationStatus = parse_field(&request.status)?;
    let station = state.station_service.update_status(&id, status).await?;
    Ok(Json(DataResponse::new(station)))
}
