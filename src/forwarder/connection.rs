use super::endpoint::WebhookEndpoint;
use super::error::ForwarderError;

/// Status and body returned by the webhook, untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub body: String,
}

/// Connection to a single webhook endpoint.
///
/// Holds no pooled idle connections, so dropping it closes the socket.
/// Redirects are not followed and no proxy is used: the configured host
/// gets exactly one request and its answer is returned as-is.
/// [`WebhookConnection::post_json`] consumes the connection: one request
/// per connection, released on every exit path.
pub struct WebhookConnection {
    endpoint: WebhookEndpoint,
    client: reqwest::Client,
}

impl WebhookConnection {
    /// Prepare a connection to `endpoint`
    pub fn open(endpoint: WebhookEndpoint) -> Result<Self, ForwarderError> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .redirect(reqwest::redirect::Policy::none())
            .no_proxy()
            .build()
            .map_err(|e| {
                ForwarderError::Delivery(format!("Failed to create HTTP client: {}", e))
            })?;

        tracing::debug!(
            host = %endpoint.host,
            port = endpoint.port,
            "Webhook connection opened"
        );

        Ok(Self { endpoint, client })
    }

    /// POST a JSON body and read the full response
    pub async fn post_json(self, body: String) -> Result<WebhookResponse, ForwarderError> {
        let response = self
            .client
            .post(self.endpoint.request_url())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| ForwarderError::Delivery(format!("Failed to send webhook: {}", e)))?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|e| {
            ForwarderError::Delivery(format!("Failed to read webhook response: {}", e))
        })?;

        Ok(WebhookResponse {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

impl Drop for WebhookConnection {
    fn drop(&mut self) {
        tracing::debug!(host = %self.endpoint.host, "Webhook connection released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{closed_port_url, spawn_redirecting_stub, spawn_webhook_stub};

    #[tokio::test]
    async fn test_post_json_reads_status_and_body() {
        let stub = spawn_webhook_stub(200, "ok").await;
        let endpoint = WebhookEndpoint::parse(&stub.url("/services/T000/B000/XXXX")).unwrap();

        let connection = WebhookConnection::open(endpoint).unwrap();
        let response = connection
            .post_json(r#"{"text":"hello"}"#.to_string())
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, "ok");

        let requests = stub.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/services/T000/B000/XXXX");
        assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
        assert_eq!(requests[0].body, r#"{"text":"hello"}"#);
    }

    #[tokio::test]
    async fn test_error_status_is_not_an_error() {
        let stub = spawn_webhook_stub(404, "no_team").await;
        let endpoint = WebhookEndpoint::parse(&stub.url("/hook")).unwrap();

        let response = WebhookConnection::open(endpoint)
            .unwrap()
            .post_json("{}".to_string())
            .await
            .unwrap();

        assert_eq!(response.status, 404);
        assert_eq!(response.body, "no_team");
    }

    #[tokio::test]
    async fn test_redirect_is_returned_not_followed() {
        let stub = spawn_redirecting_stub("/hook", "/elsewhere").await;
        let endpoint = WebhookEndpoint::parse(&stub.url("/hook")).unwrap();

        let response = WebhookConnection::open(endpoint)
            .unwrap()
            .post_json("{}".to_string())
            .await
            .unwrap();

        assert_eq!(response.status, 302);
        assert_eq!(response.body, "moved");

        let requests = stub.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/hook");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_delivery_error() {
        let endpoint = WebhookEndpoint::parse(&closed_port_url().await).unwrap();

        let err = WebhookConnection::open(endpoint)
            .unwrap()
            .post_json("{}".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, ForwarderError::Delivery(_)));
    }
}
