use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

text_enum! {
    pub enum Membership ("membership") {
        Basic => "basic",
        Premium => "premium",
        Vip => "vip",
    }
}

text_enum! {
    /// Listing filter over the `is_active` flag.
    pub enum AccountStatus ("account status") {
        Active => "active",
        Inactive => "inactive",
    }
}

/// A cafe customer. Exposed as "users" on the admin API.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub membership: Membership,
    pub is_active: bool,
    pub balance: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerFilter {
    pub status: Option<AccountStatus>,
    pub membership: Option<Membership>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomerStats {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
    pub premium: i64,
    pub vip: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCustomerStatusRequest {
    pub is_active: bool,
}

#[derive(Debug, Serialize)]
pub struct CustomerStatusResponse {
    pub success: bool,
    pub data: Customer,
    pub terminated_sessions: u64,
}
