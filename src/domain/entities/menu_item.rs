use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

text_enum! {
    pub enum MenuCategory ("menu category") {
        Food => "food",
        Beverage => "beverage",
        Snack => "snack",
        Dessert => "dessert",
    }
}

text_enum! {
    pub enum StockStatus ("stock status") {
        InStock => "in_stock",
        LowStock => "low_stock",
        OutOfStock => "out_of_stock",
    }
}

impl StockStatus {
    pub fn classify(stock: i64, low_stock_threshold: i64) -> Self {
        if stock <= 0 {
            StockStatus::OutOfStock
        } else if stock <= low_stock_threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: MenuCategory,
    pub price: f64,
    pub stock: i64,
    pub low_stock_threshold: i64,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MenuItem {
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.stock, self.low_stock_threshold)
    }
}

/// Menu item as rendered to clients, with derived stock flags.
#[derive(Debug, Clone, Serialize)]
pub struct MenuItemView {
    #[serde(flatten)]
    pub item: MenuItem,
    pub stock_status: StockStatus,
    pub is_low_stock: bool,
    pub is_out_of_stock: bool,
}

impl From<MenuItem> for MenuItemView {
    fn from(item: MenuItem) -> Self {
        let stock_status = item.stock_status();
        Self {
            item,
            stock_status,
            is_low_stock: stock_status == StockStatus::LowStock,
            is_out_of_stock: stock_status == StockStatus::OutOfStock,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub name: String,
    pub description: Option<String>,
    pub category: MenuCategory,
    pub price: f64,
    pub stock: i64,
    pub low_stock_threshold: i64,
    pub is_available: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MenuItemFilter {
    pub category: Option<MenuCategory>,
    pub stock_status: Option<StockStatus>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MenuItemStats {
    pub total: i64,
    pub available: i64,
    pub low_stock: i64,
    pub out_of_stock: i64,
    pub by_category: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMenuItemRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub category: String,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub low_stock_threshold: Option<i64>,
    pub is_available: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStockRequest {
    pub stock: i64,
}
