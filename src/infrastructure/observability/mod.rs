use crate::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

pub fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gamecafe=debug,tower_http=debug".into());

    Registry::default().with(env_filter).with(fmt_layer).init();
}

/// Starts the Prometheus exporter when enabled. Counters recorded before
/// this call, or when it is disabled, go to the no-op recorder.
pub fn init_metrics(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    if !config.metrics_enabled {
        tracing::debug!("Metrics exporter disabled");
        return Ok(());
    }

    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], config.metrics_port))
        .install()?;

    tracing::info!(
        "Metrics exporter (Prometheus) started on port {}",
        config.metrics_port
    );
    Ok(())
}
