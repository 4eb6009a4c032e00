use crate::domain::entities::{Order, OrderFilter, OrderStats, OrderStatus};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::order_repository::OrderRepository;
use crate::domain::ports::time_service::TimeService;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::shared::listing::Listing;
use std::sync::Arc;

/// Delivered and cancelled orders are final; any other move is allowed.
pub fn validate_transition(from: OrderStatus, to: OrderStatus) -> DomainResult<()> {
    if from == to || !from.is_terminal() {
        return Ok(());
    }
    Err(DomainError::ValidationError(format!(
        "Cannot change status of a {} order to {}",
        from, to
    )))
}

#[derive(Clone)]
pub struct OrderService {
    order_repo: Arc<dyn OrderRepository>,
    clock: Arc<dyn TimeService>,
}

impl OrderService {
    pub fn new(order_repo: Arc<dyn OrderRepository>, clock: Arc<dyn TimeService>) -> Self {
        Self { order_repo, clock }
    }

    pub async fn list(&self, filter: &OrderFilter) -> ApiResult<Listing<Order, OrderStats>> {
        let orders = self.order_repo.list_orders(filter).await?;
        let stats = self.order_repo.order_stats().await?;
        Ok(Listing::new(orders, stats))
    }

    pub async fn update_status(&self, id: &str, status: OrderStatus) -> ApiResult<Order> {
        let current = self.fetch(id).await?;
        validate_transition(current.status, status)?;

        let now = self.clock.now();
        let completed_at = match status {
            OrderStatus::Delivered => current.completed_at.or(Some(now)),
            _ => current.completed_at,
        };

        if !self
            .order_repo
            .update_order_status(id, status, completed_at, now)
            .await?
        {
            return Err(order_not_found());
        }
        tracing::info!("Order {} moved from {} to {}", id, current.status, status);
        self.fetch(id).await
    }

    async fn fetch(&self, id: &str) -> ApiResult<Order> {
        self.order_repo
            .get_order_by_id(id)
            .await?
            .ok_or_else(order_not_found)
    }
}

fn order_not_found() -> ApiError {
    ApiError::NotFound("Order not found".to_string())
}
