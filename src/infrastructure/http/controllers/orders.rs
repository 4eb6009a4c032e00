use crate::domain::entities::{Order, OrderFilter, OrderStats, OrderStatus, UpdateOrderStatusRequest};
use crate::infrastructure::http::controllers::parse_field;
use crate::infrastructure::http::middleware::{ApiJson, ApiPath, ApiQuery, ApiResult, AppState};
use crate::shared::{parse_filter, parse_limit, DataResponse, Listing};
use axum::{extract::State, Json};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct OrderListQuery {
    pub status: Option<String>,
    pub limit: Option<String>,
}

pub async fn list_orders(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<OrderListQuery>,
) -> ApiResult<Json<Listing<Order, OrderStats>>> {
    let filter = OrderFilter {
        status: parse_filter("status", query.status.as_deref())?,
        limit: parse_limit(query.limit.as_deref())?,
    };
    Ok(Json(state.order_service.list(&filter).await?))
}

pub async fn update_order_status(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(request): ApiJson<UpdateOrderStatusRequest>,
) -> ApiResult<Json<DataResponse<Order>>> {
    let status: OrderStatus = parse_field(&request.status)?;
    let order = state.order_service.update_status(&id, status).await?;
    Ok(Json(DataResponse::new(order)))
}
