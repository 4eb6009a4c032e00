use crate::domain::entities::{MenuItem, MenuItemFilter, MenuItemStats, StockStatus};
use crate::domain::ports::menu_item_repository::MenuItemRepository;
use crate::infrastructure::http::middleware::error::ApiResult;
use crate::infrastructure::persistence::{get_bool, get_enum, get_timestamp, Database};
use crate::shared::{format_timestamp, sql_limit};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{any::AnyRow, Row};
use std::collections::BTreeMap;

const MENU_ITEM_COLUMNS: &str = "id, name, description, category, price, stock, \
     low_stock_threshold, is_available, created_at, updated_at";

fn row_to_menu_item(row: &AnyRow) -> ApiResult<MenuItem> {
    Ok(MenuItem {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        category: get_enum(row, "category")?,
        price: row.try_get("price")?,
        stock: row.try_get("stock")?,
        low_stock_threshold: row.try_get("low_stock_threshold")?,
        is_available: get_bool(row, "is_available")?,
        created_at: get_timestamp(row, "created_at")?,
        updated_at: get_timestamp(row, "updated_at")?,
    })
}

/// SQL predicate equivalent to `StockStatus::classify`.
fn stock_condition(status: StockStatus) -> &'static str {
    match status {
        StockStatus::OutOfStock => "stock <= 0",
        StockStatus::LowStock => "stock > 0 AND stock <= low_stock_threshold",
        StockStatus::InStock => "stock > 0 AND stock > low_stock_threshold",
    }
}

#[async_trait]
impl MenuItemRepository for Database {
    async fn count_menu_items(&self) -> ApiResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM menu_items")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("count")?)
    }

    async fn create_menu_item(&self, item: &MenuItem) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO menu_items (id, name, description, category, price, stock,
                                     low_stock_threshold, is_available, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&item.id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.category.as_str())
        .bind(item.price)
        .bind(item.stock)
        .bind(item.low_stock_threshold)
        .bind(item.is_available as i64)
        .bind(format_timestamp(item.created_at))
        .bind(format_timestamp(item.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_menu_item_by_id(&self, id: &str) -> ApiResult<Option<MenuItem>> {
        let query = format!("SELECT {} FROM menu_items WHERE id = ?", MENU_ITEM_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_menu_item).transpose()
    }

    async fn list_menu_items(&self, filter: &MenuItemFilter) -> ApiResult<Vec<MenuItem>> {
        let mut conditions = Vec::new();
        if filter.category.is_some() {
            conditions.push("category = ?");
        }
        if let Some(stock_status) = filter.stock_status {
            conditions.push(stock_condition(stock_status));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let query = format!(
            "SELECT {} FROM menu_items {} ORDER BY created_at DESC LIMIT ?",
            MENU_ITEM_COLUMNS, where_clause
        );

        let mut q = sqlx::query(&query);
        if let Some(category) = filter.category {
            q = q.bind(category.as_str());
        }
        let rows = q.bind(sql_limit(filter.limit)).fetch_all(&self.pool).await?;

        rows.iter().map(row_to_menu_item).collect()
    }

    async fn menu_item_stats(&self) -> ApiResult<MenuItemStats> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS total,
                    COALESCE(SUM(CASE WHEN is_available = 1 THEN 1 ELSE 0 END), 0) AS available,
                    COALESCE(SUM(CASE WHEN stock > 0 AND stock <= low_stock_threshold THEN 1 ELSE 0 END), 0) AS low_stock,
                    COALESCE(SUM(CASE WHEN stock <= 0 THEN 1 ELSE 0 END), 0) AS out_of_stock
             FROM menu_items",
        )
        .fetch_one(&self.pool)
        .await?;

        let category_rows = sqlx::query(
            "SELECT category, COUNT(*) AS count FROM menu_items GROUP BY category ORDER BY category",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_category = BTreeMap::new();
        for category_row in &category_rows {
            let category: String = category_row.try_get("category")?;
            let count: i64 = category_row.try_get("count")?;
            by_category.insert(category, count);
        }

        Ok(MenuItemStats {
            total: row.try_get("total")?,
            available: row.try_get("available")?,
            low_stock: row.try_get("low_stock")?,
            out_of_stock: row.try_get("out_of_stock")?,
            by_category,
        })
    }

    async fn update_menu_item_stock(
        &self,
        id: &str,
        stock: i64,
        now: DateTime<Utc>,
    ) -> ApiResult<bool> {
        let result = sqlx::query("UPDATE menu_items SET stock = ?, updated_at = ? WHERE id = ?")
            .bind(stock)
            .bind(format_timestamp(now))
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_menu_item(&self, id: &str) -> ApiResult<bool> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
