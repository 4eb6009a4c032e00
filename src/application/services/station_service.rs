use crate::domain::entities::{Station, StationFilter, StationStats, StationStatus};
use crate::domain::ports::station_repository::StationRepository;
use crate::domain::ports::time_service::TimeService;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::shared::listing::Listing;
use std::sync::Arc;

#[derive(Clone)]
pub struct StationService {
    station_repo: Arc<dyn StationRepository>,
    clock: Arc<dyn TimeService>,
}

impl StationService {
    pub fn new(station_repo: Arc<dyn StationRepository>, clock: Arc<dyn TimeService>) -> Self {
        Self {
            station_repo,
            clock,
        }
    }

    pub async fn list(&self, filter: &StationFilter) -> ApiResult<Listing<Station, StationStats>> {
        let stations = self.station_repo.list_stations(filter).await?;
        let stats = self.station_repo.station_stats().await?;
        Ok(Listing::new(stations, stats))
    }

    pub async fn update_status(&self, id: &str, status: StationStatus) -> ApiResult<Station> {
        if !self
            .station_repo
            .update_station_status(id, status, self.clock.now())
            .await?
        {
            return Err(ApiError::NotFound("Station not found".to_string()));
        }
        self.station_repo
            .get_station_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Station not found".to_string()))
    }
}
