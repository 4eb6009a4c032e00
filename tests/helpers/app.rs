use crate::helpers::clock::ManualClock;
use axum::{body::Body, http::Request, Router};
use gamecafe::bootstrap::build_app_state;
use gamecafe::config::Config;
use gamecafe::domain::ports::time_service::TimeService;
use gamecafe::infrastructure::http::middleware::AppState;
use gamecafe::infrastructure::http::router::build_router;
use gamecafe::infrastructure::persistence::Database;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "test-secret";

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "JWT_SECRET" => Some(TEST_JWT_SECRET.to_string()),
        _ => None,
    })
    .expect("test config")
}

pub fn test_state(db: &Database, clock: Arc<ManualClock>) -> AppState {
    build_app_state(db.clone(), &test_config(), clock as Arc<dyn TimeService>)
}

pub fn test_router(state: AppState) -> Router {
    build_router(state, None)
}

/// Sends one request through the router and returns status and JSON body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (u16, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}
