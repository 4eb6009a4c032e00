use crate::domain::entities::{Customer, CustomerFilter, CustomerStats};
use crate::domain::ports::customer_repository::CustomerRepository;
use crate::domain::ports::gaming_session_repository::GamingSessionRepository;
use crate::domain::ports::time_service::TimeService;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::shared::listing::Listing;
use std::sync::Arc;

#[derive(Debug)]
pub struct StatusChange {
    pub customer: Customer,
    pub terminated_sessions: u64,
}

#[derive(Clone)]
pub struct CustomerService {
    customer_repo: Arc<dyn CustomerRepository>,
    session_repo: Arc<dyn GamingSessionRepository>,
    clock: Arc<dyn TimeService>,
}

impl CustomerService {
    pub fn new(
        customer_repo: Arc<dyn CustomerRepository>,
        session_repo: Arc<dyn GamingSessionRepository>,
        clock: Arc<dyn TimeService>,
    ) -> Self {
        Self {
            customer_repo,
            session_repo,
            clock,
        }
    }

    pub async fn list(
        &self,
        filter: &CustomerFilter,
    ) -> ApiResult<Listing<Customer, CustomerStats>> {
        let customers = self.customer_repo.list_customers(filter).await?;
        let stats = self.customer_repo.customer_stats().await?;
        Ok(Listing::new(customers, stats))
    }

    /// Activates or deactivates a customer. Deactivation also terminates
    /// the customer's active gaming sessions in a second, separate write.
    pub async fn set_active(&self, id: &str, is_active: bool) -> ApiResult<StatusChange> {
        let now = self.clock.now();
        if !self
            .customer_repo
            .set_customer_active(id, is_active, now)
            .await?
        {
            return Err(ApiError::NotFound("User not found".to_string()));
        }

        let terminated_sessions = if is_active {
            0
        } else {
            let count = self
                .session_repo
                .terminate_active_sessions_for_user(id, now)
                .await?;
            tracing::info!("User {} deactivated; {} active sessions terminated", id, count);
            count
        };

        let customer = self
            .customer_repo
            .get_customer_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(StatusChange {
            customer,
            terminated_sessions,
        })
    }
}
