use tracing::Instrument;

use super::config::WebhookConfig;
use super::connection::WebhookConnection;
use super::endpoint::{redact, WebhookEndpoint};
use super::error::ForwarderError;
use super::message::OutboundMessage;
use crate::event::AlertEvent;
use crate::runtime::{InvocationContext, InvocationResponse};

/// Forwards one alert event to the configured webhook
pub struct AlertForwarder;

impl AlertForwarder {
    /// Handle an invocation, reading `SLACK_WEBHOOK_URL` from the environment.
    ///
    /// A missing webhook URL fails the invocation before any connection is
    /// made. Whatever the webhook answers, success or not, is returned as-is.
    pub async fn handle(
        event: &AlertEvent,
        context: Option<&InvocationContext>,
    ) -> Result<InvocationResponse, ForwarderError> {
        Self::run(event, context, WebhookConfig::from_env).await
    }

    /// Handle an invocation with an explicit configuration
    pub async fn handle_with_config(
        event: &AlertEvent,
        context: Option<&InvocationContext>,
        config: &WebhookConfig,
    ) -> Result<InvocationResponse, ForwarderError> {
        Self::run(event, context, || Ok(config.clone())).await
    }

    async fn run<F>(
        event: &AlertEvent,
        context: Option<&InvocationContext>,
        load_config: F,
    ) -> Result<InvocationResponse, ForwarderError>
    where
        F: FnOnce() -> Result<WebhookConfig, ForwarderError>,
    {
        let request_id = context
            .and_then(|c| c.request_id.as_deref())
            .unwrap_or("-");
        let span = tracing::info_span!("forward_alert", request_id = %request_id);

        async move {
            tracing::info!(event = %event.to_log_string(), "Received alert event");

            let subject = event.subject_or_default();
            let message = OutboundMessage::compose(subject);

            let config = load_config()?;
            let endpoint = WebhookEndpoint::parse(&config.webhook_url)?;
            let body = message.to_json()?;

            let connection = WebhookConnection::open(endpoint)?;
            let response = connection.post_json(body).await?;

            tracing::info!(
                subject = %subject,
                webhook = %redact(&config.webhook_url),
                status = response.status,
                "Alert forwarded"
            );

            Ok(InvocationResponse::from(response))
        }
        .instrument(span)
        .await
    }
}
