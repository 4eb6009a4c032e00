use crate::domain::entities::{
    Customer, CustomerFilter, CustomerStats, CustomerStatusResponse, UpdateCustomerStatusRequest,
};
use crate::infrastructure::http::middleware::{ApiJson, ApiPath, ApiQuery, ApiResult, AppState};
use crate::shared::{parse_filter, parse_limit, Listing};
use axum::{extract::State, Json};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct UserListQuery {
    pub status: Option<String>,
    pub membership: Option<String>,
    pub limit: Option<String>,
}

pub async fn list_users(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<UserListQuery>,
) -> ApiResult<Json<Listing<Customer, CustomerStats>>> {
    let filter = CustomerFilter {
        status: parse_filter("status", query.status.as_deref())?,
        membership: parse_filter("membership", query.membership.as_deref())?,
        limit: parse_limit(query.limit.as_deref())?,
    };
    Ok(Json(state.customer_service.list(&filter).await?))
}

pub async fn update_user_status(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(request): ApiJson<UpdateCustomerStatusRequest>,
) -> ApiResult<Json<CustomerStatusResponse>> {
    let change = state
        .customer_service
        .set_active(&id, request.is_active)
        .await?;

    Ok(Json(CustomerStatusResponse {
        success: true,
        data: change.customer,
        terminated_sessions: change.terminated_sessions,
    }))
}
