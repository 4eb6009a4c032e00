use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

text_enum! {
    pub enum ReportStatus ("report status") {
        Pending => "pending",
        InProgress => "in_progress",
        Resolved => "resolved",
        Closed => "closed",
    }
}

text_enum! {
    pub enum ReportCategory ("report category") {
        Technical => "technical",
        Billing => "billing",
        Service => "service",
        Other => "other",
    }
}

text_enum! {
    pub enum ReportPriority ("report priority") {
        Low => "low",
        Medium => "medium",
        High => "high",
        Urgent => "urgent",
    }
}

/// A customer-submitted issue report and the staff answer to it.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub id: String,
    pub user_id: Option<String>,
    pub subject: String,
    pub description: String,
    pub category: ReportCategory,
    pub priority: ReportPriority,
    pub status: ReportStatus,
    pub admin_response: Option<String>,
    pub responded_by: Option<String>,
    pub responded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub status: Option<ReportStatus>,
    pub category: Option<ReportCategory>,
    pub priority: Option<ReportPriority>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportStats {
    pub total: i64,
    pub pending: i64,
    pub in_progress: i64,
    pub resolved: i64,
    pub closed: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReportStatusRequest {
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RespondToReportRequest {
    #[serde(default)]
    pub response: String,
    pub status: Option<String>,
}
