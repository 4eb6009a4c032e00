use crate::domain::entities::{AccountStatus, Customer, CustomerFilter, CustomerStats};
use crate::domain::ports::customer_repository::CustomerRepository;
use crate::infrastructure::http::middleware::error::ApiResult;
use crate::infrastructure::persistence::{get_bool, get_enum, get_timestamp, Database};
use crate::shared::{format_timestamp, sql_limit};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{any::AnyRow, Row};

fn row_to_customer(row: &AnyRow) -> ApiResult<Customer> {
    Ok(Customer {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        full_name: row.try_get("full_name")?,
        phone: row.try_get("phone")?,
        membership: get_enum(row, "membership")?,
        is_active: get_bool(row, "is_active")?,
        balance: row.try_get("balance")?,
        created_at: get_timestamp(row, "created_at")?,
        updated_at: get_timestamp(row, "updated_at")?,
    })
}

#[async_trait]
impl CustomerRepository for Database {
    async fn create_customer(&self, customer: &Customer) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO users (id, username, email, full_name, phone, membership, is_active,
                                balance, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&customer.id)
        .bind(&customer.username)
        .bind(&customer.email)
        .bind(&customer.full_name)
        .bind(&customer.phone)
        .bind(customer.membership.as_str())
        .bind(customer.is_active as i64)
        .bind(customer.balance)
        .bind(format_timestamp(customer.created_at))
        .bind(format_timestamp(customer.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_customer_by_id(&self, id: &str) -> ApiResult<Option<Customer>> {
        let row = sqlx::query(
            "SELECT id, username, email, full_name, phone, membership, is_active, balance,
                    created_at, updated_at
             FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_customer).transpose()
    }

    async fn list_customers(&self, filter: &CustomerFilter) -> ApiResult<Vec<Customer>> {
        let mut conditions: Vec<&str> = Vec::new();
        match filter.status {
            Some(AccountStatus::Active) => conditions.push("is_active = 1"),
            Some(AccountStatus::Inactive) => conditions.push("is_active = 0"),
            None => {}
        }
        if filter.membership.is_some() {
            conditions.push("membership = ?");
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT id, username, email, full_name, phone, membership, is_active, balance,
                    created_at, updated_at
             FROM users {}
             ORDER BY created_at DESC
             LIMIT ?",
            where_clause
        );

        let mut q = sqlx::query(&query);
        if let Some(membership) = filter.membership {
            q = q.bind(membership.as_str());
        }
        let rows = q.bind(sql_limit(filter.limit)).fetch_all(&self.pool).await?;

        rows.iter().map(row_to_customer).collect()
    }

    async fn customer_stats(&self) -> ApiResult<CustomerStats> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS total,
                    COALESCE(SUM(CASE WHEN is_active = 1 THEN 1 ELSE 0 END), 0) AS active,
                    COALESCE(SUM(CASE WHEN is_active = 0 THEN 1 ELSE 0 END), 0) AS inactive,
                    COALESCE(SUM(CASE WHEN membership = 'premium' THEN 1 ELSE 0 END), 0) AS premium,
                    COALESCE(SUM(CASE WHEN membership = 'vip' THEN 1 ELSE 0 END), 0) AS vip
             FROM users",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(CustomerStats {
            total: row.try_get("total")?,
            active: row.try_get("active")?,
            inactive: row.try_get("inactive")?,
            premium: row.try_get("premium")?,
            vip: row.try_get("vip")?,
        })
    }

    async fn set_customer_active(
        &self,
        id: &str,
        is_active: bool,
        now: DateTime<Utc>,
    ) -> ApiResult<bool> {
        let result = sqlx::query("UPDATE users SET is_active = ?, updated_at = ? WHERE id = ?")
            .bind(is_active as i64)
            .bind(format_timestamp(now))
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_customers_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ApiResult<i64> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS count FROM users WHERE created_at >= ? AND created_at < ?",
        )
        .bind(format_timestamp(start))
        .bind(format_timestamp(end))
        .fetch_one(&self.pool)
        .await?;

        Ok(row.try_get("count")?)
    }
}
