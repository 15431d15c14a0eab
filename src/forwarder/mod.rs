//! Alert forwarding to a chat webhook
//!
//! One invocation reads the webhook configuration, composes a message from
//! the event subject and posts it once. The webhook's own status and body
//! become the invocation result.

pub mod config;
pub mod connection;
pub mod endpoint;
pub mod error;
pub mod handler;
pub mod message;

pub use config::{WebhookConfig, WEBHOOK_URL_ENV};
pub use connection::{WebhookConnection, WebhookResponse};
pub use endpoint::WebhookEndpoint;
pub use error::ForwarderError;
pub use handler::AlertForwarder;
pub use message::{OutboundMessage, DASHBOARD_LABEL, DASHBOARD_URL};
