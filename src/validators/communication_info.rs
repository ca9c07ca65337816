//! Validation of the communication info payload.
//!
//! Checks run in a fixed order and the first failure wins, so callers can
//! rely on which message is reported for a payload with several problems:
//!
//! 1. the input is an object
//! 2. `conversationId` is a non-empty string
//! 3. `sender` is a truthy object
//! 4. `sender` passes the sender validator (its reason is wrapped as
//!    `'sender' <reason>.`)
//! 5. `body`, when truthy, is a string

use crate::domain::guards::{is_object, is_string, is_truthy};
use crate::domain::{ConversationId, ValidationError, ValidationResult};
use crate::models::CommunicationInfo;
use crate::validators::{PersonValidator, Validator};
use serde_json::Value;

/// Validates communication info payloads, delegating `sender` to `P`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommunicationInfoValidator<P = PersonValidator> {
    sender: P,
}

impl CommunicationInfoValidator {
    /// Create a validator using the built-in person validator for `sender`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: Validator> CommunicationInfoValidator<P> {
    /// Create a validator with a custom `sender` validator.
    pub fn with_sender_validator(sender: P) -> Self {
        Self { sender }
    }

    fn check(&self, input: &Value) -> ValidationResult<CommunicationInfo<P::Output>> {
        if !is_object(input) {
            return Err(ValidationError::NotAnObject);
        }

        // ConversationId::new rejects the empty string with the same error
        let conversation_id = match input.get("conversationId").and_then(Value::as_str) {
            Some(id) => ConversationId::new(id)?,
            None => {
                return Err(ValidationError::InvalidString {
                    field: "conversationId",
                })
            }
        };

        let sender = input
            .get("sender")
            .filter(|v| is_truthy(v) && is_object(v))
            .ok_or(ValidationError::InvalidObject { field: "sender" })?;

        let sender = self
            .sender
            .validate(sender)
            .map_err(|e| e.within("sender"))?;

        let mut out = CommunicationInfo {
            conversation_id,
            sender,
            body: None,
        };

        if let Some(body) = input.get("body").filter(|v| is_truthy(v)) {
            if !is_string(body) {
                return Err(ValidationError::InvalidString { field: "body" });
            }
            out.body = body.as_str().map(str::to_string);
        }

        Ok(out)
    }
}

impl<P: Validator> Validator for CommunicationInfoValidator<P> {
    type Output = CommunicationInfo<P::Output>;

    fn validate(&self, input: &Value) -> ValidationResult<Self::Output> {
        match self.check(input) {
            Ok(info) => {
                tracing::trace!(
                    conversation_id = %info.conversation_id,
                    has_body = info.has_body(),
                    "Communication info accepted"
                );
                Ok(info)
            }
            Err(e) => {
                tracing::debug!(error = %e, "Communication info rejected");
                Err(e)
            }
        }
    }
}

/// Validate a communication info payload with the built-in person validator.
///
/// # Example
///
/// ```
/// use comm_info_validator::validate_communication_info;
/// use serde_json::json;
///
/// let info = validate_communication_info(&json!({
///     "conversationId": "c1",
///     "sender": {"id": "p1", "displayName": "Ada"},
/// }))
/// .unwrap();
/// assert_eq!(info.conversation_id.as_str(), "c1");
/// assert!(info.body.is_none());
/// ```
pub fn validate_communication_info(input: &Value) -> ValidationResult<CommunicationInfo> {
    CommunicationInfoValidator::new().validate(input)
}
