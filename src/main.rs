//! Alert Relay, standalone invocation
//!
//! Run with: cargo run [-- path/to/event.json]
//!
//! Invokes the forwarder once, with the event from the given file or the
//! empty event `{}`, and no invocation context. Prints the result as JSON.
//!
//! Environment variables:
//! - SLACK_WEBHOOK_URL: Webhook to post to (required)
//! - RUST_LOG: Log level (default: alert_relay=info)

use std::path::PathBuf;

use alert_relay::runtime::load_event;
use alert_relay::AlertForwarder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alert_relay=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let event_path = std::env::args().nth(1).map(PathBuf::from);
    let event = load_event(event_path.as_deref())?;

    let response = AlertForwarder::handle(&event, None).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
