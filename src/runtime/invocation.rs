use serde::{Deserialize, Serialize};

use crate::forwarder::WebhookResponse;

/// Platform-supplied invocation metadata.
///
/// Accepted for interface compatibility. The forwarder only attaches the
/// request id to its log span.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvocationContext {
    pub request_id: Option<String>,
    pub function_name: Option<String>,
    /// Invocation deadline (unix millis)
    pub deadline_ms: Option<i64>,
}

impl InvocationContext {
    pub fn with_request_id(request_id: impl Into<String>) -> Self {
        Self {
            request_id: Some(request_id.into()),
            ..Self::default()
        }
    }
}

/// Function result: `{"statusCode": ..., "body": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub body: String,
}

impl From<WebhookResponse> for InvocationResponse {
    fn from(response: WebhookResponse) -> Self {
        Self {
            status_code: response.status,
            body: response.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_wire_shape() {
        let response = InvocationResponse::from(WebhookResponse {
            status: 500,
            body: "error".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"statusCode": 500, "body": "error"})
        );
    }

    #[test]
    fn test_context_defaults() {
        let context: InvocationContext =
            serde_json::from_value(json!({"request_id": "abc-123"})).unwrap();
        assert_eq!(context, InvocationContext::with_request_id("abc-123"));
        assert_eq!(context.function_name, None);
    }
}
