use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

text_enum! {
    pub enum StationType ("station type") {
        Pc => "pc",
        Console => "console",
        Vr => "vr",
    }
}

text_enum! {
    pub enum StationStatus ("station status") {
        Available => "available",
        Occupied => "occupied",
        Maintenance => "maintenance",
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub station_type: StationType,
    pub status: StationStatus,
    pub hourly_rate: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct StationFilter {
    pub status: Option<StationStatus>,
    pub station_type: Option<StationType>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StationStats {
    pub total: i64,
    pub available: i64,
    pub occupied: i64,
    pub maintenance: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStationStatusRequest {
    pub status: String,
}
