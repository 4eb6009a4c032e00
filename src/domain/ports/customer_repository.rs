use crate::domain::entities::{Customer, CustomerFilter, CustomerStats};
use crate::infrastructure::http::middleware::error::ApiResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn create_customer(&self, customer: &Customer) -> ApiResult<()>;
    async fn get_customer_by_id(&self, id: &str) -> ApiResult<Option<Customer>>;
    async fn list_customers(&self, filter: &CustomerFilter) -> ApiResult<Vec<Customer>>;
    async fn customer_stats(&self) -> ApiResult<CustomerStats>;
    /// Returns false when no customer has this id.
    async fn set_customer_active(
        &self,
        id: &str,
        is_active: bool,
        now: DateTime<Utc>,
    ) -> ApiResult<bool>;
    async fn count_customers_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ApiResult<i64>;
}
