//! Communication info attached to an iOS communication notification.

use crate::domain::ConversationId;
use crate::models::Person;
use crate::validators::{CommunicationInfoValidator, Validator};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A validated communication info record.
///
/// `S` is the sender record produced by the sender validator. It defaults
/// to [`Person`], the output of the built-in person validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationInfo<S = Person> {
    /// Conversation the notification belongs to
    pub conversation_id: ConversationId,

    /// Sender of the message, as returned by the sender validator
    pub sender: S,

    /// Message body, only present when a non-empty body was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl<S> CommunicationInfo<S> {
    /// Whether a message body is attached.
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }
}

// Serde support - deserialize through the communication info validator
impl<'de> Deserialize<'de> for CommunicationInfo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        CommunicationInfoValidator::new()
            .validate(&value)
            .map_err(serde::de::Error::custom)
    }
}
