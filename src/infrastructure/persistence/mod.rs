use crate::domain::ports::time_service::TimeService;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::shared::utils::parse_timestamp;
use chrono::{DateTime, Utc};
use log::LevelFilter;
use sqlx::{
    any::{AnyConnectOptions, AnyPoolOptions, AnyRow},
    AnyPool, ConnectOptions, Row,
};
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

mod admins;
mod customers;
mod gaming_sessions;
mod menu_items;
mod orders;
mod reports;
mod stations;

/// Connectivity of the shared pool as reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Disconnecting,
    Unknown,
}

impl ConnectionState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => ConnectionState::Disconnected,
            1 => ConnectionState::Connecting,
            2 => ConnectionState::Connected,
            3 => ConnectionState::Disconnecting,
            _ => ConnectionState::Unknown,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            ConnectionState::Disconnected => 0,
            ConnectionState::Connecting => 1,
            ConnectionState::Connected => 2,
            ConnectionState::Disconnecting => 3,
            ConnectionState::Unknown => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionState::Disconnected => "disconnected",
            ConnectionState::Connecting => "connecting",
            ConnectionState::Connected => "connected",
            ConnectionState::Disconnecting => "disconnecting",
            ConnectionState::Unknown => "unknown",
        }
    }
}

/// Handle to the store. Cloning shares the pool and the connection state.
#[derive(Clone)]
pub struct Database {
    pub(crate) pool: AnyPool,
    state: Arc<AtomicU8>,
}

impl Database {
    /// Builds the handle without opening a connection. The state stays
    /// `Connecting` until [`Database::establish`] succeeds.
    pub fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        // Ensure drivers are installed for AnyPool
        sqlx::any::install_default_drivers();

        let mut connect_options = AnyConnectOptions::from_str(database_url)?;

        connect_options = connect_options
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_secs(1));

        let mut pool_options = AnyPoolOptions::new().max_connections(20).min_connections(1);

        // Connection-scoped pragmas must run on every pooled connection.
        if database_url.starts_with("sqlite") {
            pool_options = pool_options.after_connect(|conn, _meta| {
                Box::pin(async move {
                    sqlx::query("PRAGMA journal_mode = WAL")
                        .execute(&mut *conn)
                        .await?;
                    sqlx::query("PRAGMA busy_timeout = 5000")
                        .execute(&mut *conn)
                        .await?;
                    sqlx::query("PRAGMA synchronous = NORMAL")
                        .execute(&mut *conn)
                        .await?;
                    sqlx::query("PRAGMA foreign_keys = ON")
                        .execute(&mut *conn)
                        .await?;
                    Ok(())
                })
            });
        }

        Ok(Self {
            pool: pool_options.connect_lazy_with(connect_options),
            state: Arc::new(AtomicU8::new(ConnectionState::Connecting.as_u8())),
        })
    }

    /// Opens one connection to prove the store is reachable.
    pub async fn establish(&self) -> Result<(), sqlx::Error> {
        self.set_state(ConnectionState::Connecting);
        match self.pool.acquire().await {
            Ok(_conn) => {
                self.set_state(ConnectionState::Connected);
                Ok(())
            }
            Err(e) => {
                self.set_state(ConnectionState::Disconnected);
                Err(e)
            }
        }
    }

    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let db = Self::new(database_url)?;
        db.establish().await?;
        Ok(db)
    }

    /// One attempt, then a single retry after `retry_delay`.
    pub async fn connect_with_retry(
        database_url: &str,
        retry_delay: Duration,
        clock: &dyn TimeService,
    ) -> Result<Self, sqlx::Error> {
        tracing::info!("Connecting to database");
        let db = Self::new(database_url)?;

        if let Err(e) = db.establish().await {
            tracing::warn!(
                "Database connection failed: {}. Retrying in {}s",
                e,
                retry_delay.as_secs()
            );
            clock.sleep(retry_delay).await;

            if let Err(e) = db.establish().await {
                tracing::error!("Database connection failed after retry: {}", e);
                db.close().await;
                return Err(e);
            }
        }

        Ok(db)
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("migrations/sqlite").run(&self.pool).await
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    pub fn connection_state(&self) -> ConnectionState {
        let state = ConnectionState::from_u8(self.state.load(Ordering::SeqCst));
        if state == ConnectionState::Connected && self.pool.is_closed() {
            return ConnectionState::Disconnected;
        }
        state
    }

    pub async fn close(&self) {
        self.set_state(ConnectionState::Disconnecting);
        self.pool.close().await;
        self.set_state(ConnectionState::Disconnected);
        tracing::info!("Database connection closed");
    }

    fn set_state(&self, state: ConnectionState) {
        self.state.store(state.as_u8(), Ordering::SeqCst);
    }
}

// Row decoding helpers shared by the repository implementations.

pub(crate) fn get_timestamp(row: &AnyRow, column: &str) -> ApiResult<DateTime<Utc>> {
    let raw: String = row.try_get(column)?;
    parse_timestamp(&raw)
        .map_err(|e| ApiError::Internal(format!("Invalid timestamp in {}: {}", column, e)))
}

pub(crate) fn get_optional_timestamp(
    row: &AnyRow,
    column: &str,
) -> ApiResult<Option<DateTime<Utc>>> {
    let raw: Option<String> = row.try_get(column)?;
    raw.map(|value| {
        parse_timestamp(&value)
            .map_err(|e| ApiError::Internal(format!("Invalid timestamp in {}: {}", column, e)))
    })
    .transpose()
}

pub(crate) fn get_enum<T>(row: &AnyRow, column: &str) -> ApiResult<T>
where
    T: FromStr<Err = String>,
{
    let raw: String = row.try_get(column)?;
    raw.parse::<T>().map_err(ApiError::Internal)
}

pub(crate) fn get_bool(row: &AnyRow, column: &str) -> ApiResult<bool> {
    Ok(row.try_get::<i64, _>(column)? != 0)
}
