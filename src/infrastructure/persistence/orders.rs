use crate::domain::entities::{
    DailyOrderSummary, Order, OrderFilter, OrderItem, OrderStats, OrderStatus, OrderTotals,
};
use crate::domain::ports::order_repository::OrderRepository;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::persistence::{
    get_enum, get_optional_timestamp, get_timestamp, Database,
};
use crate::shared::{format_timestamp, sql_limit};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{any::AnyRow, Row};

const ORDER_COLUMNS: &str = "id, user_id, customer_name, items, total, status, station_id, notes, \
     completed_at, created_at, updated_at";

fn row_to_order(row: &AnyRow) -> ApiResult<Order> {
    let items: String = row.try_get("items")?;
    let items: Vec<OrderItem> = serde_json::from_str(&items)?;

    Ok(Order {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        customer_name: row.try_get("customer_name")?,
        items,
        total: row.try_get("total")?,
        status: get_enum(row, "status")?,
        station_id: row.try_get("station_id")?,
        notes: row.try_get("notes")?,
        completed_at: get_optional_timestamp(row, "completed_at")?,
        created_at: get_timestamp(row, "created_at")?,
        updated_at: get_timestamp(row, "updated_at")?,
    })
}

#[async_trait]
impl OrderRepository for Database {
    async fn create_order(&self, order: &Order) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO orders (id, user_id, customer_name, items, total, status, station_id,
                                 notes, completed_at, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&order.id)
        .bind(&order.user_id)
        .bind(&order.customer_name)
        .bind(serde_json::to_string(&order.items)?)
        .bind(order.total)
        .bind(order.status.as_str())
        .bind(&order.station_id)
        .bind(&order.notes)
        .bind(order.completed_at.map(format_timestamp))
        .bind(format_timestamp(order.created_at))
        .bind(format_timestamp(order.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_order_by_id(&self, id: &str) -> ApiResult<Option<Order>> {
        let query = format!("SELECT {} FROM orders WHERE id = ?", ORDER_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_order).transpose()
    }

    async fn list_orders(&self, filter: &OrderFilter) -> ApiResult<Vec<Order>> {
        let where_clause = if filter.status.is_some() {
            "WHERE status = ?"
        } else {
            ""
        };
        let query = format!(
            "SELECT {} FROM orders {} ORDER BY created_at DESC LIMIT ?",
            ORDER_COLUMNS, where_clause
        );

        let mut q = sqlx::query(&query);
        if let Some(status) = filter.status {
            q = q.bind(status.as_str());
        }
        let rows = q.bind(sql_limit(filter.limit)).fetch_all(&self.pool).await?;

        rows.iter().map(row_to_order).collect()
    }

    async fn order_stats(&self) -> ApiResult<OrderStats> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS total,
                    COALESCE(SUM(CASE WHEN status = 'pending' THEN 1 ELSE 0 END), 0) AS pending,
                    COALESCE(SUM(CASE WHEN status = 'preparing' THEN 1 ELSE 0 END), 0) AS preparing,
                    COALESCE(SUM(CASE WHEN status = 'ready' THEN 1 ELSE 0 END), 0) AS ready,
                    COALESCE(SUM(CASE WHEN status = 'delivered' THEN 1 ELSE 0 END), 0) AS delivered,
                    COALESCE(SUM(CASE WHEN status = 'cancelled' THEN 1 ELSE 0 END), 0) AS cancelled,
                    CAST(COALESCE(SUM(CASE WHEN status = 'delivered' THEN total END), 0) AS REAL) AS revenue
             FROM orders",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(OrderStats {
            total: row.try_get("total")?,
            pending: row.try_get("pending")?,
            preparing: row.try_get("preparing")?,
            ready: row.try_get("ready")?,
            delivered: row.try_get("delivered")?,
            cancelled: row.try_get("cancelled")?,
            revenue: row.try_get("revenue")?,
        })
    }

    async fn update_order_status(
        &self,
        id: &str,
        status: OrderStatus,
        completed_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> ApiResult<bool> {
        let result = sqlx::query(
            "UPDATE orders
             SET status = ?, completed_at = COALESCE(?, completed_at), updated_at = ?
             WHERE id = ?",
        )
        .bind(status.as_str())
        .bind(completed_at.map(format_timestamp))
        .bind(format_timestamp(now))
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn order_totals_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ApiResult<OrderTotals> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS orders,
                    COALESCE(SUM(CASE WHEN status = 'delivered' THEN 1 ELSE 0 END), 0) AS delivered_orders,
                    CAST(COALESCE(SUM(CASE WHEN status = 'delivered' THEN total END), 0) AS REAL) AS revenue
             FROM orders
             WHERE created_at >= ? AND created_at < ?",
        )
        .bind(format_timestamp(start))
        .bind(format_timestamp(end))
        .fetch_one(&self.pool)
        .await?;

        Ok(OrderTotals {
            orders: row.try_get("orders")?,
            delivered_orders: row.try_get("delivered_orders")?,
            revenue: row.try_get("revenue")?,
        })
    }

    async fn daily_order_breakdown(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ApiResult<Vec<DailyOrderSummary>> {
        let rows = sqlx::query(
            "SELECT substr(created_at, 1, 10) AS day,
                    COUNT(*) AS orders,
                    CAST(COALESCE(SUM(CASE WHEN status = 'delivered' THEN total END), 0) AS REAL) AS revenue
             FROM orders
             WHERE created_at >= ? AND created_at < ?
             GROUP BY day
             ORDER BY day ASC",
        )
        .bind(format_timestamp(start))
        .bind(format_timestamp(end))
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                let day: String = row.try_get("day")?;
                let date = NaiveDate::parse_from_str(&day, "%Y-%m-%d")
                    .map_err(|e| ApiError::Internal(format!("Invalid order date {}: {}", day, e)))?;
                Ok(DailyOrderSummary {
                    date,
                    orders: row.try_get("orders")?,
                    revenue: row.try_get("revenue")?,
                })
            })
            .collect()
    }
}
