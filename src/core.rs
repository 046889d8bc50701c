//! Core domain types for the alarm notifier
//!
//! This module defines the shapes that flow through one invocation: the SNS
//! event batch delivered by the platform, the CloudWatch alarm message carried
//! inside each record, and the chat message sent to the webhook.

use crate::error::NotifierError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// An ordered batch of notification records, as delivered by the platform.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AlarmEventBatch {
    #[serde(rename = "Records")]
    pub records: Vec<NotificationRecord>,
}

/// One delivered notification. Read-only input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationRecord {
    #[serde(rename = "EventSource", default)]
    pub event_source: Option<String>,
    #[serde(rename = "Sns")]
    pub sns: SnsEnvelope,
}

/// The SNS envelope. `message` holds the JSON-encoded alarm message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SnsEnvelope {
    #[serde(rename = "MessageId", default)]
    pub message_id: Option<String>,
    #[serde(rename = "Subject", default)]
    pub subject: Option<String>,
    #[serde(rename = "Timestamp", default)]
    pub timestamp: Option<String>,
    #[serde(rename = "Message")]
    pub message: String,
}

impl NotificationRecord {
    /// Wraps an encoded alarm message in a minimal envelope.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            event_source: Some("aws:sns".to_string()),
            sns: SnsEnvelope {
                message: message.into(),
                ..Default::default()
            },
        }
    }

    /// Decodes the alarm message carried by this record.
    pub fn alarm_message(&self) -> Result<AlarmMessage, NotifierError> {
        AlarmMessage::parse(&self.sns.message)
    }
}

impl From<Vec<NotificationRecord>> for AlarmEventBatch {
    fn from(records: Vec<NotificationRecord>) -> Self {
        Self { records }
    }
}

/// A CloudWatch alarm state-change message.
///
/// Only the three fields the notifier reads are typed. The complete decoded
/// document, extra fields included and in their original order, is kept in
/// `raw` so it can be dumped verbatim.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AlarmMessage {
    #[serde(rename = "AlarmName")]
    pub alarm_name: String,
    #[serde(rename = "NewStateValue")]
    pub new_state_value: String,
    #[serde(rename = "NewStateReason", default)]
    pub new_state_reason: Option<String>,
    #[serde(skip)]
    pub raw: Value,
}

impl AlarmMessage {
    /// Parses an alarm message from its JSON encoding.
    ///
    /// Fails if the text is not JSON, or if `AlarmName` or `NewStateValue` is
    /// missing or not a string. A null or absent reason is tolerated.
    pub fn parse(encoded: &str) -> Result<Self, NotifierError> {
        let raw: Value = serde_json::from_str(encoded)?;
        let mut message = AlarmMessage::deserialize(&raw)?;
        message.raw = raw;
        Ok(message)
    }

    /// The state reason, or a placeholder when CloudWatch sent none.
    pub fn reason(&self) -> &str {
        self.new_state_reason.as_deref().unwrap_or("no reason given")
    }

    /// True when the alarm moved back to the `OK` state.
    pub fn is_recovery(&self) -> bool {
        self.new_state_value.eq_ignore_ascii_case("ok")
    }
}

/// The body posted to the chat webhook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl fmt::Display for ChatMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::json!({ "text": self.text }))
    }
}
