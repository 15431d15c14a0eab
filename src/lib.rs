//! Alert Relay: forwards infrastructure alert notifications to a chat webhook
//!
//! Each invocation takes a pub/sub notification event, pulls the subject
//! line out of `Records[0].Sns.Subject` (falling back to `"ECS Alert"`),
//! and posts `{"text": "<subject> <dashboard|ECS Service Health Dashboard>."}`
//! to the URL in `SLACK_WEBHOOK_URL`. The webhook's status and body are
//! returned verbatim as `{"statusCode", "body"}`.
//!
//! # Example
//!
//! ```no_run
//! use alert_relay::{AlertEvent, AlertForwarder, WebhookConfig};
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), alert_relay::ForwarderError> {
//! let event = AlertEvent::new(json!({
//!     "Records": [{"Sns": {"Subject": "ALARM: reviso-server-cpu"}}]
//! }));
//! let config = WebhookConfig::new("https://hooks.slack.com/services/T000/B000/XXXX");
//!
//! let response = AlertForwarder::handle_with_config(&event, None, &config).await?;
//! println!("{} {}", response.status_code, response.body);
//! # Ok(())
//! # }
//! ```

pub mod event;
pub mod forwarder;
pub mod runtime;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use event::{AlertEvent, DEFAULT_SUBJECT};
pub use forwarder::{AlertForwarder, ForwarderError, OutboundMessage, WebhookConfig};
pub use runtime::{InvocationContext, InvocationResponse};
