use crate::domain::entities::{Station, StationFilter, StationStats, StationStatus};
use crate::infrastructure::http::middleware::error::ApiResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait StationRepository: Send + Sync {
    async fn create_station(&self, station: &Station) -> ApiResult<()>;
    async fn get_station_by_id(&self, id: &str) -> ApiResult<Option<Station>>;
    async fn list_stations(&self, filter: &StationFilter) -> ApiResult<Vec<Station>>;
    async fn station_stats(&self) -> ApiResult<StationStats>;
    async fn update_station_status(
        &self,
        id: &str,
        status: StationStatus,
        now: DateTime<Utc>,
    ) -> ApiResult<bool>;
}
