//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur while validating a payload.
///
/// The `Display` output of every variant is the exact human-readable
/// message surfaced to callers. Nested failures accumulate field context
/// from the innermost field outwards, e.g. `'sender' 'id' expected a valid
/// string value..`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is not a JSON object.
    #[error("expected an object.")]
    NotAnObject,

    /// A field is missing, empty, or not a string.
    #[error("'{field}' expected a valid string value.")]
    InvalidString { field: &'static str },

    /// A field is missing, falsy, or not an object.
    #[error("'{field}' expected a valid object value.")]
    InvalidObject { field: &'static str },

    /// A nested validator rejected the value held by `field`.
    #[error("'{field}' {source}.")]
    Nested {
        field: &'static str,
        source: Box<ValidationError>,
    },

    /// Free-form reason reported by an external validator.
    #[error("{0}")]
    Message(String),
}

impl ValidationError {
    /// Wrap this error with the name of the field that held the rejected value.
    pub fn within(self, field: &'static str) -> Self {
        Self::Nested {
            field,
            source: Box::new(self),
        }
    }

    /// The rendered, human-readable message.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ValidationError::NotAnObject.to_string(), "expected an object.");
        assert_eq!(
            ValidationError::InvalidString { field: "body" }.to_string(),
            "'body' expected a valid string value."
        );
        assert_eq!(
            ValidationError::InvalidObject { field: "sender" }.to_string(),
            "'sender' expected a valid object value."
        );
    }

    #[test]
    fn test_nested_error_keeps_inner_reason() {
        let err = ValidationError::InvalidString { field: "id" }.within("sender");
        assert_eq!(err.message(), "'sender' 'id' expected a valid string value..");
    }

    #[test]
    fn test_message_variant_renders_verbatim() {
        let err = ValidationError::Message("unknown person".to_string()).within("sender");
        assert_eq!(err.to_string(), "'sender' unknown person.");
    }
}
