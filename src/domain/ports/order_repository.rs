use crate::domain::entities::{
    DailyOrderSummary, Order, OrderFilter, OrderStats, OrderStatus, OrderTotals,
};
use crate::infrastructure::http::middleware::error::ApiResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create_order(&self, order: &Order) -> ApiResult<()>;
    async fn get_order_by_id(&self, id: &str) -> ApiResult<Option<Order>>;
    async fn list_orders(&self, filter: &OrderFilter) -> ApiResult<Vec<Order>>;
    async fn order_stats(&self) -> ApiResult<OrderStats>;
    async fn update_order_status(
        &self,
        id: &str,
        status: OrderStatus,
        completed_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> ApiResult<bool>;
    /// Order count and delivered revenue for orders created in `[start, end)`.
    async fn order_totals_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ApiResult<OrderTotals>;
    async fn daily_order_breakdown(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ApiResult<Vec<DailyOrderSummary>>;
}
