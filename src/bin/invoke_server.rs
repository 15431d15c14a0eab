//! Local invocation endpoint
//!
//! Run with: cargo run --bin invoke_server
//!
//! POST an event to /2015-03-31/functions/function/invocations and the
//! forwarder runs once for it.
//!
//! Environment variables:
//! - ALERT_RELAY_HOST: Bind address (default: 0.0.0.0)
//! - ALERT_RELAY_PORT: Port number (default: 9000)
//! - SLACK_WEBHOOK_URL: Webhook to post to, read on every invocation
//! - RUST_LOG: Log level (default: alert_relay=info,tower_http=info)

use alert_relay::forwarder::WEBHOOK_URL_ENV;
use alert_relay::runtime::{run_server, ServerConfig, INVOKE_PATH};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alert_relay=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    tracing::info!("Alert Relay configuration:");
    tracing::info!("  Listen: {}:{}", config.host, config.port);
    tracing::info!("  Invoke path: {}", INVOKE_PATH);
    if std::env::var(WEBHOOK_URL_ENV).is_err() {
        tracing::warn!("  {} is not set; invocations will fail", WEBHOOK_URL_ENV);
    }

    run_server(config).await
}
