//! Domain value objects and types.
//!
//! This module contains the validation error type, the type guards used to
//! inspect untyped payloads, and type-safe wrappers such as the conversation
//! ID that reject invalid data at construction time.

pub mod conversation_id;
pub mod errors;
pub mod guards;

pub use conversation_id::ConversationId;
pub use errors::{ValidationError, ValidationResult};
pub use guards::{is_object, is_string, is_truthy};
