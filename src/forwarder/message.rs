use serde::{Deserialize, Serialize};

use super::error::ForwarderError;

/// ECS service health dashboard linked from every alert
pub const DASHBOARD_URL: &str = "https://us-west-2.console.aws.amazon.com/ecs/v2/clusters/reviso/services/reviso-server/health?region=us-west-2#";

/// Link text for [`DASHBOARD_URL`]
pub const DASHBOARD_LABEL: &str = "ECS Service Health Dashboard";

/// Chat message body: `{"text": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub text: String,
}

impl OutboundMessage {
    /// Compose the alert text, `"<subject> <dashboard|label>."`
    pub fn compose(subject: &str) -> Self {
        Self {
            text: format!("{} <{}|{}>.", subject, DASHBOARD_URL, DASHBOARD_LABEL),
        }
    }

    pub fn to_json(&self) -> Result<String, ForwarderError> {
        serde_json::to_string(self).map_err(|e| ForwarderError::Serialization(e.to_string()))
    }
}
