use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

text_enum! {
    pub enum OrderStatus ("order status") {
        Pending => "pending",
        Preparing => "preparing",
        Ready => "ready",
        Delivered => "delivered",
        Cancelled => "cancelled",
    }
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub menu_item_id: Option<String>,
    pub name: String,
    pub quantity: i64,
    pub unit_price: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: String,
    pub user_id: Option<String>,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: OrderStatus,
    pub station_id: Option<String>,
    pub notes: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderStats {
    pub total: i64,
    pub pending: i64,
    pub preparing: i64,
    pub ready: i64,
    pub delivered: i64,
    pub cancelled: i64,
    /// Sum of totals over delivered orders.
    pub revenue: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}
