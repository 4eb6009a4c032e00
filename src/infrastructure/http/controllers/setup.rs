use crate::domain::entities::{AdminProfile, SetupRequest};
use crate::infrastructure::http::middleware::{ApiJson, ApiResult, AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct SetupResponse {
    pub success: bool,
    pub message: String,
    pub admin: AdminProfile,
}

pub async fn setup(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SetupRequest>,
) -> ApiResult<(StatusCode, Json<SetupResponse>)> {
    let admin = state.setup_service.setup(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(SetupResponse {
            success: true,
            message: "Admin account created".to_string(),
            admin,
        }),
    ))
}
