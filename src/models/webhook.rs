use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Flat record sent to the webhook; field order is the wire key order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub name: String,
    pub name_first: String,
    pub name_last: String,
    pub email: String,
    pub message: String,
}

/// Descriptor of a completed HTTP exchange with the webhook endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub completed_at: DateTime<Utc>,
}

/// Outcome of a single delivery attempt. Never persisted, only logged.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum DeliveryResult {
    /// The endpoint answered. Any status code counts, including non-2xx.
    Completed(WebhookResponse),
    /// Nothing usable came back: DNS, connect, TLS, timeout, or a payload
    /// that could not be encoded.
    Failed { message: String, timed_out: bool },
}

impl DeliveryResult {
    pub fn failed(message: impl Into<String>) -> Self {
        DeliveryResult::Failed {
            message: message.into(),
            timed_out: false,
        }
    }
}

// Terminal state of one forward() call
#[derive(Debug, Clone)]
pub enum ForwardOutcome {
    Skipped,
    Attempted(DeliveryResult),
}

impl ForwardOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, ForwardOutcome::Skipped)
    }
}

// Response structure for the inbound webhook endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmissionAck {
    pub success: bool,
    pub message: String,
}
