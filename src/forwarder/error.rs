/// Errors that abort an invocation.
///
/// A non-2xx webhook response is not one of them; it is returned as a
/// normal result.
#[derive(Debug, thiserror::Error)]
pub enum ForwarderError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid webhook URL: {0}")]
    InvalidWebhookUrl(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("Failed to load event: {0}")]
    EventLoad(String),
}

impl ForwarderError {
    /// Short machine-readable name, used in invocation error payloads
    pub fn kind(&self) -> &'static str {
        match self {
            ForwarderError::Configuration(_) => "ConfigurationError",
            ForwarderError::InvalidWebhookUrl(_) => "InvalidWebhookUrl",
            ForwarderError::Serialization(_) => "SerializationError",
            ForwarderError::Delivery(_) => "DeliveryError",
            ForwarderError::EventLoad(_) => "EventLoadError",
        }
    }
}
