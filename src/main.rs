use gamecafe::bootstrap;
use gamecafe::config::Config;
use gamecafe::domain::ports::time_service::TimeService;
use gamecafe::infrastructure::http::router::build_router;
use gamecafe::infrastructure::observability;
use gamecafe::infrastructure::persistence::Database;
use gamecafe::infrastructure::runtime::TokioTimeService;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::init_tracing();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    observability::init_metrics(&config)?;

    let clock: Arc<dyn TimeService> = Arc::new(TokioTimeService::new());

    let db = Database::connect_with_retry(
        &config.database_url,
        Duration::from_secs(config.database_retry_delay_secs),
        clock.as_ref(),
    )
    .await?;
    tracing::info!("Database connection established");

    db.run_migrations().await?;
    tracing::info!("Database migrations applied");

    let state = bootstrap::build_app_state(db.clone(), &config, clock);

    if let Err(e) = bootstrap::seed_defaults(&state, &config).await {
        tracing::error!("Failed to seed defaults: {}", e);
        db.close().await;
        return Err(e.into());
    }

    let app = build_router(state, config.cors_origin.as_deref());

    let addr = config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped, closing database");
    db.close().await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
