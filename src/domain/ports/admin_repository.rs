use crate::domain::entities::{Admin, LoginState};
use crate::infrastructure::http::middleware::error::ApiResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn count_admins(&self) -> ApiResult<i64>;
    /// Inserts `admin` only when no admin exists yet. Returns whether the
    /// row was written.
    async fn create_first_admin(&self, admin: &Admin) -> ApiResult<bool>;
    async fn create_admin(&self, admin: &Admin) -> ApiResult<()>;
    /// Matches `identifier` against the username, or the lowercased
    /// identifier against the email.
    async fn find_by_identifier(&self, identifier: &str) -> ApiResult<Option<Admin>>;
    async fn get_admin_by_id(&self, id: &str) -> ApiResult<Option<Admin>>;
    async fn update_login_state(
        &self,
        id: &str,
        state: &LoginState,
        now: DateTime<Utc>,
    ) -> ApiResult<()>;
}
