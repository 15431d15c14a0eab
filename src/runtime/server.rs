use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::invocation::{InvocationContext, InvocationResponse};
use crate::event::AlertEvent;
use crate::forwarder::{AlertForwarder, ForwarderError, WebhookConfig};

/// Invocation path used by local function emulators
pub const INVOKE_PATH: &str = "/2015-03-31/functions/function/invocations";

/// Header carrying the caller's request id
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Invocation endpoint configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Create a server config from environment variables
    /// ALERT_RELAY_HOST=0.0.0.0
    /// ALERT_RELAY_PORT=9000
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = std::env::var("ALERT_RELAY_HOST").unwrap_or(defaults.host);
        let port = std::env::var("ALERT_RELAY_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        Self { host, port }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9000,
        }
    }
}

/// Where each invocation gets its webhook configuration
#[derive(Debug, Clone, Default)]
pub enum ConfigSource {
    /// Read `SLACK_WEBHOOK_URL` on every invocation
    #[default]
    Environment,
    Fixed(WebhookConfig),
}

/// State shared across invocation handlers
#[derive(Debug, Default)]
pub struct AppState {
    pub config_source: ConfigSource,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Run the forwarder for one posted event
pub async fn invoke(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<InvocationResponse>, InvokeError> {
    // Anything that is not JSON still reaches the handler, as a string event
    let raw = serde_json::from_slice::<Value>(&body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()));
    let event = AlertEvent::new(raw);

    let context = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(InvocationContext::with_request_id)
        .unwrap_or_default();

    let response = match &state.config_source {
        ConfigSource::Environment => AlertForwarder::handle(&event, Some(&context)).await?,
        ConfigSource::Fixed(config) => {
            AlertForwarder::handle_with_config(&event, Some(&context), config).await?
        }
    };
    Ok(Json(response))
}

/// Failed invocation, reported as `{"errorType": ..., "errorMessage": ...}`
#[derive(Debug)]
pub struct InvokeError(ForwarderError);

impl From<ForwarderError> for InvokeError {
    fn from(err: ForwarderError) -> Self {
        Self(err)
    }
}

impl IntoResponse for InvokeError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Invocation failed");

        let body = serde_json::json!({
            "errorType": self.0.kind(),
            "errorMessage": self.0.to_string(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Build the invocation router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(INVOKE_PATH, post(invoke))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve invocations until Ctrl+C
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(Arc::new(AppState::default()));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("Starting invocation endpoint on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Invocation endpoint stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
