use crate::application::services::menu_service::validate_new_item;
use crate::domain::entities::{
    CreateMenuItemRequest, MenuItemFilter, MenuItemStats, MenuItemView, UpdateStockRequest,
};
use crate::infrastructure::http::middleware::{ApiJson, ApiPath, ApiQuery, ApiResult, AppState};
use crate::shared::{parse_filter, parse_limit, DataResponse, Listing, MessageResponse};
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct MenuItemListQuery {
    pub category: Option<String>,
    pub stock_status: Option<String>,
    pub limit: Option<String>,
}

pub async fn list_menu_items(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MenuItemListQuery>,
) -> ApiResult<Json<Listing<MenuItemView, MenuItemStats>>> {
    let filter = MenuItemFilter {
        category: parse_filter("category", query.category.as_deref())?,
        stock_status: parse_filter("stock_status", query.stock_status.as_deref())?,
        limit: parse_limit(query.limit.as_deref())?,
    };
    let listing = state.menu_service.list(&filter).await?;
    Ok(Json(listing.map(MenuItemView::from)))
}

pub async fn create_menu_item(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateMenuItemRequest>,
) -> ApiResult<(StatusCode, Json<DataResponse<MenuItemView>>)> {
    let new_item = validate_new_item(request)?;
    let item = state.menu_service.create(new_item).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(MenuItemView::from(item))),
    ))
}

pub async fn delete_menu_item(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.menu_service.delete(&id).await?;
    Ok(Json(MessageResponse::new("Menu item deleted")))
}

pub async fn update_menu_item_stock(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(request): ApiJson<UpdateStockRequest>,
) -> ApiResult<Json<DataResponse<MenuItemView>>> {
    let item = state.menu_service.update_stock(&id, request.stock).await?;
    Ok(Json(DataResponse::new(MenuItemView::from(item))))
}
