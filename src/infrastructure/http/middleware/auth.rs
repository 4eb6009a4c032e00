use crate::application::services::{
    AnalyticsService, AuthService, Claims, CustomerService, GamingSessionService, MenuService,
    OrderService, ReportService, SetupService, StationService,
};
use crate::domain::entities::Permission;
use crate::domain::ports::time_service::TimeService;
use crate::infrastructure::http::middleware::error::ApiError;
use crate::infrastructure::persistence::Database;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub auth_service: AuthService,
    pub setup_service: SetupService,
    pub report_service: ReportService,
    pub customer_service: CustomerService,
    pub menu_service: MenuService,
    pub order_service: OrderService,
    pub gaming_session_service: GamingSessionService,
    pub station_service: StationService,
    pub analytics_service: AnalyticsService,
    pub clock: Arc<dyn TimeService>,
    pub started_at: Instant,
}

/// Identity attached to the request once the bearer token checks out.
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
    pub claims: Claims,
}

impl AuthenticatedAdmin {
    pub fn id(&self) -> &str {
        &self.claims.sub
    }

    pub fn username(&self) -> &str {
        &self.claims.username
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.claims.permissions.allows(permission)
    }
}

/// Require a valid `Authorization: Bearer` token.
///
/// A missing header is 401; a token that fails verification is 403.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Access token required".to_string()))?;

    let claims = state.auth_service.tokens().verify(token)?;

    request
        .extensions_mut()
        .insert(AuthenticatedAdmin { claims });

    Ok(next.run(request).await)
}
