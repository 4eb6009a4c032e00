use crate::domain::entities::{AdminProfile, LoginRequest, LoginResponse};
use crate::infrastructure::http::middleware::{
    ApiJson, ApiResult, AppState, AuthenticatedAdmin,
};
use crate::shared::DataResponse;
use axum::{extract::State, Extension, Json};

pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let response = state
        .auth_service
        .login(&request.identifier, &request.password)
        .await?;
    Ok(Json(response))
}

pub async fn me(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedAdmin>,
) -> ApiResult<Json<DataResponse<AdminProfile>>> {
    let profile = state.auth_service.profile(admin.id()).await?;
    Ok(Json(DataResponse::new(profile)))
}
