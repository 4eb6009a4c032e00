use chrono::{DateTime, Utc};
use serde::Serialize;

text_enum! {
    pub enum SessionStatus ("session status") {
        Active => "active",
        Paused => "paused",
        Completed => "completed",
        Terminated => "terminated",
    }
}

/// Time a customer spends on a gaming station.
#[derive(Debug, Clone, Serialize)]
pub struct GamingSession {
    pub id: String,
    pub user_id: String,
    pub station_id: String,
    pub status: SessionStatus,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub amount: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct SessionFilter {
    pub status: Option<SessionStatus>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionStats {
    pub total: i64,
    pub active: i64,
    pub paused: i64,
    pub completed: i64,
    pub terminated: i64,
}
