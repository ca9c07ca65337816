//! Payload validators.
//!
//! Each validator turns an untyped JSON value into a normalized record or
//! fails with a [`ValidationError`](crate::domain::ValidationError) carrying
//! a human-readable message. Validators compose: the communication info
//! validator delegates the `sender` field to any [`Validator`].

pub mod communication_info;
pub mod person;

pub use communication_info::{validate_communication_info, CommunicationInfoValidator};
pub use person::{validate_person, PersonValidator};

use crate::domain::ValidationResult;
use serde_json::Value;

/// A validator from an untyped value into a typed record.
pub trait Validator {
    /// The normalized record produced on success.
    type Output;

    /// Validate `input`, failing on the first violated rule.
    fn validate(&self, input: &Value) -> ValidationResult<Self::Output>;
}

impl<V: Validator + ?Sized> Validator for &V {
    type Output = V::Output;

    fn validate(&self, input: &Value) -> ValidationResult<Self::Output> {
        (**self).validate(input)
    }
}
