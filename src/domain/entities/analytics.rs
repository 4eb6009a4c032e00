use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Inclusive calendar-day range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct OrderTotals {
    pub orders: i64,
    pub delivered_orders: i64,
    /// Sum over delivered orders only.
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyOrderSummary {
    pub date: NaiveDate,
    pub orders: i64,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSummary {
    pub range: DateRange,
    pub total_orders: i64,
    pub revenue: f64,
    pub average_order_value: f64,
    pub finished_sessions: i64,
    pub new_customers: i64,
    pub daily: Vec<DailyOrderSummary>,
}
