use crate::domain::entities::Permission;
use crate::infrastructure::http::controllers::{
    analytics, auth, health, menu_items, orders, reports, sessions, setup, stations, users,
};
use crate::infrastructure::http::middleware::{require_auth, require_permission, ApiError, AppState};
use axum::{
    http::{HeaderValue, Method},
    middleware::{from_fn, from_fn_with_state},
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
    Router,
};
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: AppState, cors_origin: Option<&str>) -> Router {
    let reports = Router::new()
        .route("/admin/reports", get(reports::list_reports))
        .route(
            "/admin/reports/:id/status",
            patch(reports::update_report_status),
        )
        .route(
            "/admin/reports/:id/response",
            patch(reports::respond_to_report),
        )
        .route_layer(from_fn(require_permission(Permission::ManageReports)));

    let users = Router::new()
        .route("/admin/users", get(users::list_users))
        .route("/admin/users/:id/status", patch(users::update_user_status))
        .route_layer(from_fn(require_permission(Permission::ManageUsers)));

    let menu = Router::new()
        .route(
            "/admin/menu-items",
            get(menu_items::list_menu_items).post(menu_items::create_menu_item),
        )
        .route("/admin/menu-items/:id", delete(menu_items::delete_menu_item))
        .route(
            "/admin/menu-items/:id/stock",
            patch(menu_items::update_menu_item_stock),
        )
        .route_layer(from_fn(require_permission(Permission::ManageMenu)));

    let orders = Router::new()
        .route("/admin/orders", get(orders::list_orders))
        .route("/admin/orders/:id/status", patch(orders::update_order_status))
        .route_layer(from_fn(require_permission(Permission::ManageOrders)));

    let sessions = Router::new()
        .route("/admin/sessions", get(sessions::list_sessions))
        .route_layer(from_fn(require_permission(Permission::ManageSessions)));

    let stations = Router::new()
        .route("/admin/stations", get(stations::list_stations))
        .route(
            "/admin/stations/:id/status",
            patch(stations::update_station_status),
        )
        .route_layer(from_fn(require_permission(Permission::ManageStations)));

    let analytics = Router::new()
        .route("/admin/analytics", get(analytics::get_analytics))
        .route_layer(from_fn(require_permission(Permission::ViewAnalytics)));

    // Permission layers run after require_auth has attached the admin.
    let protected = Router::new()
        .route("/auth/me", get(auth::me))
        .merge(reports)
        .merge(users)
        .merge(menu)
        .merge(orders)
        .merge(sessions)
        .merge(stations)
        .merge(analytics)
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    let public = Router::new()
        .route("/health", get(health::health))
        .route("/auth/login", post(auth::login))
        .route("/admin/setup", post(setup::setup));

    Router::new()
        .merge(public)
        .merge(protected)
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origin))
        .with_state(state)
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AnyOrigin);

    match origin.map(HeaderValue::from_str) {
        Some(Ok(origin)) => base.allow_origin(origin),
        Some(Err(_)) => {
            tracing::warn!("Ignoring invalid CORS_ORIGIN, allowing any origin");
            base.allow_origin(AnyOrigin)
        }
        None => base.allow_origin(AnyOrigin),
    }
}

async fn not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Internal(format!("Handler panicked: {}", detail)).into_response()
}
