mod helpers;

use gamecafe::domain::entities::*;
use gamecafe::domain::ports::time_service::TimeService;
use helpers::*;
use serde_json::{json, Value};
use std::sync::Arc;

async fn login_token(app: &axum::Router, identifier: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "username": identifier, "password": password })),
    )
    .await;
    assert_eq!(status, 200, "login failed: {}", body);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health_reports_connected_database() {
    let test_db = setup_test_db().await;
    let clock = Arc::new(ManualClock::starting_now());
    let app = test_router(test_state(&test_db.db, clock));

    let (status, body) = send(&app, "GET", "/health", None, None).await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["database"], "connected");
    assert!(body["uptime_seconds"].is_u64());
    assert!(body["timestamp"].is_string());

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_health_reports_closed_database() {
    let test_db = setup_test_db().await;
    let clock = Arc::new(ManualClock::starting_now());
    let app = test_router(test_state(&test_db.db, clock));

    test_db.db.close().await;
    let (status, body) = send(&app, "GET", "/health", None, None).await;

    assert_eq!(status, 200);
    assert_eq!(body["database"], "disconnected");

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_protected_routes_require_valid_token() {
    let test_db = setup_test_db().await;
    let clock = Arc::new(ManualClock::starting_now());
    let app = test_router(test_state(&test_db.db, clock));

    let (status, body) = send(&app, "GET", "/admin/users", None, None).await;
    assert_eq!(status, 401);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Access token required");

    let (status, _) = send(&app, "GET", "/admin/users", Some("not-a-jwt"), None).await;
    assert_eq!(status, 403);

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_permission_enforced_per_route() {
    let test_db = setup_test_db().await;
    let clock = Arc::new(ManualClock::starting_now());
    let app = test_router(test_state(&test_db.db, clock.clone()));

    create_test_admin(&test_db.db, "floor", "secret123", AdminRole::Manager, clock.now()).await;
    let token = login_token(&app, "floor", "secret123").await;

    let (status, body) = send(&app, "GET", "/admin/users", Some(&token), None).await;
    assert_eq!(status, 403);
    assert!(body["error"].as_str().unwrap().contains("manage_users"));

    let (status, _) = send(&app, "GET", "/admin/orders", Some(&token), None).await;
    assert_eq!(status, 200);

    let (status, body) = send(&app, "GET", "/auth/me", Some(&token), None).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["username"], "floor");
    assert_eq!(body["data"]["role"], "manager");

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_setup_then_login() {
    let test_db = setup_test_db().await;
    let clock = Arc::new(ManualClock::starting_now());
    let app = test_router(test_state(&test_db.db, clock));

    let request = json!({
        "username": "owner",
        "email": "owner@gamecafe.io",
        "password": "supersecret",
        "full_name": "Cafe Owner"
    });

    let (status, body) = send(&app, "POST", "/admin/setup", None, Some(request.clone())).await;
    assert_eq!(status, 201);
    assert_eq!(body["success"], true);
    assert_eq!(body["admin"]["role"], "super_admin");
    assert!(body["admin"].get("password_hash").is_none());

    let (status, body) = send(&app, "POST", "/admin/setup", None, Some(request)).await;
    assert_eq!(status, 400);
    assert_eq!(body["success"], false);

    let token = login_token(&app, "OWNER@gamecafe.io", "supersecret").await;
    assert!(!token.is_empty());

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_repeated_bad_logins_lock_account() {
    let test_db = setup_test_db().await;
    let clock = Arc::new(ManualClock::starting_now());
    let app = test_router(test_state(&test_db.db, clock.clone()));

    create_test_admin(&test_db.db, "alice", "secret123", AdminRole::Admin, clock.now()).await;

    let bad = json!({ "username": "alice", "password": "wrong" });
    for _ in 0..4 {
        let (status, body) = send(&app, "POST", "/auth/login", None, Some(bad.clone())).await;
        assert_eq!(status, 401);
        assert_eq!(body["error"], "Invalid credentials");
    }

    let (status, _) = send(&app, "POST", "/auth/login", None, Some(bad)).await;
    assert_eq!(status, 423);

    let good = json!({ "username": "alice", "password": "secret123" });
    let (status, _) = send(&app, "POST", "/auth/login", None, Some(good)).await;
    assert_eq!(status, 423);

    let unknown = json!({ "username": "nobody", "password": "wrong" });
    let (status, body) = send(&app, "POST", "/auth/login", None, Some(unknown)).await;
    assert_eq!(status, 401);
    assert_eq!(body["error"], "Invalid credentials");

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_list_endpoint_shape_and_validation() {
    let test_db = setup_test_db().await;
    let clock = Arc::new(ManualClock::starting_now());
    let app = test_router(test_state(&test_db.db, clock.clone()));
    let t0 = clock.now();

    create_test_admin(&test_db.db, "root", "secret123", AdminRole::SuperAdmin, t0).await;
    create_test_menu_item(&test_db.db, "Cola", MenuCategory::Beverage, 40, t0).await;
    create_test_menu_item(&test_db.db, "Chips", MenuCategory::Snack, 0, t0).await;
    let token = login_token(&app, "root", "secret123").await;

    let (status, body) = send(
        &app,
        "GET",
        "/admin/menu-items?category=all&limit=1",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["stats"]["total"], 2);
    assert_eq!(body["stats"]["out_of_stock"], 1);

    let (status, body) = send(
        &app,
        "GET",
        "/admin/menu-items?stock_status=out_of_stock",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, 200);
    let first: &Value = &body["data"][0];
    assert_eq!(first["name"], "Chips");
    assert_eq!(first["is_out_of_stock"], true);

    let (status, _) = send(&app, "GET", "/admin/reports?status=archived", Some(&token), None).await;
    assert_eq!(status, 400);

    let (status, _) = send(&app, "GET", "/admin/orders?limit=0", Some(&token), None).await;
    assert_eq!(status, 400);

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_user_status_endpoint_reports_terminated_sessions() {
    let test_db = setup_test_db().await;
    let clock = Arc::new(ManualClock::starting_now());
    let app = test_router(test_state(&test_db.db, clock.clone()));
    let t0 = clock.now();

    create_test_admin(&test_db.db, "root", "secret123", AdminRole::SuperAdmin, t0).await;
    let player = create_test_customer(&test_db.db, "p1", Membership::Basic, t0).await;
    let station = create_test_station(&test_db.db, "PC-01", StationType::Pc, StationStatus::Occupied, t0).await;
    create_test_session(&test_db.db, &player.id, &station.id, SessionStatus::Active, t0).await;
    let token = login_token(&app, "root", "secret123").await;

    let uri = format!("/admin/users/{}/status", player.id);
    let (status, body) = send(&app, "PATCH", &uri, Some(&token), Some(json!({ "is_active": false }))).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["is_active"], false);
    assert_eq!(body["terminated_sessions"], 1);

    let (status, _) = send(
        &app,
        "PATCH",
        "/admin/users/unknown/status",
        Some(&token),
        Some(json!({ "is_active": false })),
    )
    .await;
    assert_eq!(status, 404);

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let test_db = setup_test_db().await;
    let clock = Arc::new(ManualClock::starting_now());
    let app = test_router(test_state(&test_db.db, clock));

    let (status, body) = send(&app, "GET", "/does/not/exist", None, None).await;
    assert_eq!(status, 404);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Route not found");

    teardown_test_db(test_db).await;
}
