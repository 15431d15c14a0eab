//! Alert notification events

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::path::{lookup, JsonPath};

/// Subject used when the event does not carry one
pub const DEFAULT_SUBJECT: &str = "ECS Alert";

/// Where a pub/sub notification keeps its subject line
pub const SUBJECT_PATH: &str = "Records[0].Sns.Subject";

/// An inbound notification event.
///
/// Wraps whatever JSON the platform delivered. Construction never fails;
/// the shape is only inspected when the subject is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertEvent {
    raw: Value,
}

impl AlertEvent {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// The empty object `{}`, used for standalone smoke tests
    pub fn empty() -> Self {
        Self::new(Value::Object(serde_json::Map::new()))
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Subject line at `Records[0].Sns.Subject`, if it is present and a string
    pub fn subject(&self) -> Option<&str> {
        lookup(&self.raw, &subject_path()).and_then(Value::as_str)
    }

    /// Subject line, or [`DEFAULT_SUBJECT`] for any other event shape
    pub fn subject_or_default(&self) -> &str {
        self.subject().unwrap_or(DEFAULT_SUBJECT)
    }

    /// Compact JSON rendering for the invocation log
    pub fn to_log_string(&self) -> String {
        self.raw.to_string()
    }
}

impl Default for AlertEvent {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for AlertEvent {
    fn from(raw: Value) -> Self {
        Self::new(raw)
    }
}

fn subject_path() -> JsonPath {
    JsonPath::new().key("Records").index(0).key("Sns").key("Subject")
}
