//! Comm Info Validator - validation gate for iOS communication notification payloads.
//!
//! Notifications that represent a message from a person carry a
//! "communication info" payload: a conversation ID, the sender, and an
//! optional message body. This library checks the shape of that payload
//! before it is handed to the native push integration and returns a
//! normalized, strongly-typed record or a descriptive error.
//!
//! # Architecture
//!
//! - **domain**: Validation error, type guards, and value objects
//! - **models**: Normalized person and communication info records
//! - **validators**: The `Validator` trait and its implementations
//! - **config**: Configuration for the command-line host
//! - **input**: Bounded loading of JSON documents
//! - **error**: Host error types

pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod models;
pub mod validators;

pub use config::Config;
pub use domain::{ConversationId, ValidationError, ValidationResult};
pub use error::{ConfigError, InputError};
pub use models::{CommunicationInfo, Person};
pub use validators::{
    validate_communication_info, validate_person, CommunicationInfoValidator, PersonValidator,
    Validator,
};
