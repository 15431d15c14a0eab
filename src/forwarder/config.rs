use super::error::ForwarderError;

/// Environment variable holding the webhook URL
pub const WEBHOOK_URL_ENV: &str = "SLACK_WEBHOOK_URL";

/// Webhook configuration, read once per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    /// Full webhook URL, e.g. `https://hooks.slack.com/services/T000/B000/XXXX`
    pub webhook_url: String,
}

impl WebhookConfig {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
        }
    }

    /// Create a config from environment variables
    /// SLACK_WEBHOOK_URL=https://hooks.slack.com/services/...
    pub fn from_env() -> Result<Self, ForwarderError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create a config through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ForwarderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let webhook_url = lookup(WEBHOOK_URL_ENV)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                ForwarderError::Configuration(format!("{} must be set", WEBHOOK_URL_ENV))
            })?;

        Ok(Self { webhook_url })
    }
}
