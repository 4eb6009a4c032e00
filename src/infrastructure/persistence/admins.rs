use crate::domain::entities::{Admin, LoginState, Permissions};
use crate::domain::ports::admin_repository::AdminRepository;
use crate::infrastructure::http::middleware::error::ApiResult;
use crate::infrastructure::persistence::{
    get_bool, get_enum, get_optional_timestamp, get_timestamp, Database,
};
use crate::shared::utils::format_timestamp;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{any::AnyRow, Row};

const ADMIN_COLUMNS: &str = "id, username, email, full_name, role, permissions, password_hash, \
     is_active, failed_login_attempts, last_failed_login_at, locked_until, last_login_at, \
     created_at, updated_at";

fn row_to_admin(row: &AnyRow) -> ApiResult<Admin> {
    let permissions: String = row.try_get("permissions")?;
    let permissions: Permissions = serde_json::from_str(&permissions)?;

    Ok(Admin {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        full_name: row.try_get("full_name")?,
        role: get_enum(row, "role")?,
        permissions,
        password_hash: row.try_get("password_hash")?,
        is_active: get_bool(row, "is_active")?,
        login: LoginState {
            failed_attempts: row.try_get::<i64, _>("failed_login_attempts")?.max(0) as u32,
            last_failed_at: get_optional_timestamp(row, "last_failed_login_at")?,
            locked_until: get_optional_timestamp(row, "locked_until")?,
            last_login_at: get_optional_timestamp(row, "last_login_at")?,
        },
        created_at: get_timestamp(row, "created_at")?,
        updated_at: get_timestamp(row, "updated_at")?,
    })
}

#[async_trait]
impl AdminRepository for Database {
    async fn count_admins(&self) -> ApiResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM admins")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("count")?)
    }

    async fn create_first_admin(&self, admin: &Admin) -> ApiResult<bool> {
        let result = sqlx::query(
            "INSERT INTO admins (id, username, email, full_name, role, permissions, password_hash,
                                 is_active, failed_login_attempts, created_at, updated_at)
             SELECT ?, ?, ?, ?, ?, ?, ?, ?, 0, ?, ?
             WHERE NOT EXISTS (SELECT 1 FROM admins)",
        )
        .bind(&admin.id)
        .bind(&admin.username)
        .bind(&admin.email)
        .bind(&admin.full_name)
        .bind(admin.role.as_str())
        .bind(serde_json::to_string(&admin.permissions)?)
        .bind(&admin.password_hash)
        .bind(admin.is_active as i64)
        .bind(format_timestamp(admin.created_at))
        .bind(format_timestamp(admin.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn create_admin(&self, admin: &Admin) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO admins (id, username, email, full_name, role, permissions, password_hash,
                                 is_active, failed_login_attempts, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, 0, ?, ?)",
        )
        .bind(&admin.id)
        .bind(&admin.username)
        .bind(&admin.email)
        .bind(&admin.full_name)
        .bind(admin.role.as_str())
        .bind(serde_json::to_string(&admin.permissions)?)
        .bind(&admin.password_hash)
        .bind(admin.is_active as i64)
        .bind(format_timestamp(admin.created_at))
        .bind(format_timestamp(admin.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_identifier(&self, identifier: &str) -> ApiResult<Option<Admin>> {
        let query = format!(
            "SELECT {} FROM admins WHERE username = ? OR email = ? LIMIT 1",
            ADMIN_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(identifier)
            .bind(identifier.to_lowercase())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_admin).transpose()
    }

    async fn get_admin_by_id(&self, id: &str) -> ApiResult<Option<Admin>> {
        let query = format!("SELECT {} FROM admins WHERE id = ?", ADMIN_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_admin).transpose()
    }

    async fn update_login_state(
        &self,
        id: &str,
        state: &LoginState,
        now: DateTime<Utc>,
    ) -> ApiResult<()> {
        sqlx::query(
            "UPDATE admins
             SET failed_login_attempts = ?, last_failed_login_at = ?, locked_until = ?,
                 last_login_at = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(state.failed_attempts as i64)
        .bind(state.last_failed_at.map(format_timestamp))
        .bind(state.locked_until.map(format_timestamp))
        .bind(state.last_login_at.map(format_timestamp))
        .bind(format_timestamp(now))
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
