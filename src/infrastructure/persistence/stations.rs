use crate::domain::entities::{Station, StationFilter, StationStats, StationStatus};
use crate::domain::ports::station_repository::StationRepository;
use crate::infrastructure::http::middleware::error::ApiResult;
use crate::infrastructure::persistence::{get_enum, get_timestamp, Database};
use crate::shared::{format_timestamp, sql_limit};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{any::AnyRow, Row};

const STATION_COLUMNS: &str =
    "id, name, station_type, status, hourly_rate, created_at, updated_at";

fn row_to_station(row: &AnyRow) -> ApiResult<Station> {
    Ok(Station {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        station_type: get_enum(row, "station_type")?,
        status: get_enum(row, "status")?,
        hourly_rate: row.try_get("hourly_rate")?,
        created_at: get_timestamp(row, "created_at")?,
        updated_at: get_timestamp(row, "updated_at")?,
    })
}

#[async_trait]
impl StationRepository for Database {
    async fn create_station(&self, station: &Station) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO gaming_stations (id, name, station_type, status, hourly_rate,
                                          created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&station.id)
        .bind(&station.name)
        .bind(station.station_type.as_str())
        .bind(station.status.as_str())
        .bind(station.hourly_rate)
        .bind(format_timestamp(station.created_at))
        .bind(format_timestamp(station.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_station_by_id(&self, id: &str) -> ApiResult<Option<Station>> {
        let query = format!("SELECT {} FROM gaming_stations WHERE id = ?", STATION_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_station).transpose()
    }

    async fn list_stations(&self, filter: &StationFilter) -> ApiResult<Vec<Station>> {
        let mut conditions = Vec::new();
        let mut params: Vec<&'static str> = Vec::new();
        if let Some(status) = filter.status {
            conditions.push("status = ?");
            params.push(status.as_str());
        }
        if let Some(station_type) = filter.station_type {
            conditions.push("station_type = ?");
            params.push(station_type.as_str());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let query = format!(
            "SELECT {} FROM gaming_stations {} ORDER BY created_at DESC LIMIT ?",
            STATION_COLUMNS, where_clause
        );

        let mut q = sqlx::query(&query);
        for param in params {
            q = q.bind(param);
        }
        let rows = q.bind(sql_limit(filter.limit)).fetch_all(&self.pool).await?;

        rows.iter().map(row_to_station).collect()
    }

    async fn station_stats(&self) -> ApiResult<StationStats> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS total,
                    COALESCE(SUM(CASE WHEN status = 'available' THEN 1 ELSE 0 END), 0) AS available,
                    COALESCE(SUM(CASE WHEN status = 'occupied' THEN 1 ELSE 0 END), 0) AS occupied,
                    COALESCE(SUM(CASE WHEN status = 'maintenance' THEN 1 ELSE 0 END), 0) AS maintenance
             FROM gaming_stations",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(StationStats {
            total: row.try_get("total")?,
            available: row.try_get("available")?,
            occupied: row.try_get("occupied")?,
            maintenance: row.try_get("maintenance")?,
        })
    }

    async fn update_station_status(
        &self,
        id: &str,
        status: StationStatus,
        now: DateTime<Utc>,
    ) -> ApiResult<bool> {
        let result =
            sqlx::query("UPDATE gaming_stations SET status = ?, updated_at = ? WHERE id = ?")
                .bind(status.as_str())
                .bind(format_timestamp(now))
                .bind(id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}
