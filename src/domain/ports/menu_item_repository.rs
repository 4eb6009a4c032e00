use crate::domain::entities::{MenuItem, MenuItemFilter, MenuItemStats};
use crate::infrastructure::http::middleware::error::ApiResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    async fn count_menu_items(&self) -> ApiResult<i64>;
    async fn create_menu_item(&self, item: &MenuItem) -> ApiResult<()>;
    async fn get_menu_item_by_id(&self, id: &str) -> ApiResult<Option<MenuItem>>;
    async fn list_menu_items(&self, filter: &MenuItemFilter) -> ApiResult<Vec<MenuItem>>;
    async fn menu_item_stats(&self) -> ApiResult<MenuItemStats>;
    async fn update_menu_item_stock(
        &self,
        id: &str,
        stock: i64,
        now: DateTime<Utc>,
    ) -> ApiResult<bool>;
    async fn delete_menu_item(&self, id: &str) -> ApiResult<bool>;
}
