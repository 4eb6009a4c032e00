use crate::application::services::*;
use crate::config::Config;
use crate::domain::ports::admin_repository::AdminRepository;
use crate::domain::ports::customer_repository::CustomerRepository;
use crate::domain::ports::gaming_session_repository::GamingSessionRepository;
use crate::domain::ports::menu_item_repository::MenuItemRepository;
use crate::domain::ports::order_repository::OrderRepository;
use crate::domain::ports::report_repository::ReportRepository;
use crate::domain::ports::station_repository::StationRepository;
use crate::domain::ports::time_service::TimeService;
use crate::infrastructure::http::middleware::{ApiResult, AppState};
use crate::infrastructure::persistence::Database;
use std::sync::Arc;
use std::time::Instant;

pub fn lockout_policy(config: &Config) -> LockoutPolicy {
    LockoutPolicy {
        max_attempts: config.max_login_attempts,
        lock_duration: chrono::Duration::minutes(config.lockout_duration_minutes),
    }
}

pub fn build_app_state(db: Database, config: &Config, clock: Arc<dyn TimeService>) -> AppState {
    let admin_repo: Arc<dyn AdminRepository> = Arc::new(db.clone());
    let customer_repo: Arc<dyn CustomerRepository> = Arc::new(db.clone());
    let session_repo: Arc<dyn GamingSessionRepository> = Arc::new(db.clone());
    let menu_repo: Arc<dyn MenuItemRepository> = Arc::new(db.clone());
    let order_repo: Arc<dyn OrderRepository> = Arc::new(db.clone());
    let report_repo: Arc<dyn ReportRepository> = Arc::new(db.clone());
    let station_repo: Arc<dyn StationRepository> = Arc::new(db.clone());

    let tokens = TokenService::new(&config.jwt_secret, config.token_duration_hours);
    let auth_service = AuthService::new(
        admin_repo.clone(),
        tokens,
        clock.clone(),
        lockout_policy(config),
    );
    tracing::info!(
        "Auth service initialized (lock after {} failures for {} minutes)",
        config.max_login_attempts,
        config.lockout_duration_minutes
    );

    let setup_service = SetupService::new(admin_repo, clock.clone());
    let report_service = ReportService::new(report_repo, clock.clone());
    let customer_service =
        CustomerService::new(customer_repo.clone(), session_repo.clone(), clock.clone());
    let menu_service = MenuService::new(menu_repo, clock.clone());
    let order_service = OrderService::new(order_repo.clone(), clock.clone());
    let gaming_session_service = GamingSessionService::new(session_repo.clone());
    let station_service = StationService::new(station_repo, clock.clone());
    let analytics_service =
        AnalyticsService::new(order_repo, session_repo, customer_repo, clock.clone());

    AppState {
        db,
        auth_service,
        setup_service,
        report_service,
        customer_service,
        menu_service,
        order_service,
        gaming_session_service,
        station_service,
        analytics_service,
        clock,
        started_at: Instant::now(),
    }
}

/// Creates the default admin and menu catalog on an empty store. Each step
/// checks for existing records first and never overwrites.
pub async fn seed_defaults(state: &AppState, config: &Config) -> ApiResult<()> {
    let created = state
        .setup_service
        .ensure_default_admin(
            &config.default_admin_username,
            &config.default_admin_email,
            &config.default_admin_password,
        )
        .await?;
    if created {
        tracing::info!(
            "Default admin '{}' created; change its password",
            config.default_admin_username
        );
    } else {
        tracing::debug!("Admin accounts present, skipping default admin");
    }

    let seeded = state.menu_service.seed_default_catalog().await?;
    if seeded > 0 {
        tracing::info!("Seeded {} default menu items", seeded);
    }

    Ok(())
}
