//! Validation of the person record used as a notification sender.

use crate::domain::guards::{is_object, is_string, is_truthy, non_empty_str};
use crate::domain::{ValidationError, ValidationResult};
use crate::models::Person;
use crate::validators::Validator;
use serde_json::Value;

/// Validates person records.
///
/// # Validation Rules
///
/// - Input must be an object
/// - `id` must be a non-empty string
/// - `displayName` must be a non-empty string
/// - `avatar`, when truthy, must be a string
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonValidator;

impl Validator for PersonValidator {
    type Output = Person;

    fn validate(&self, input: &Value) -> ValidationResult<Person> {
        if !is_object(input) {
            return Err(ValidationError::NotAnObject);
        }

        let id = non_empty_str(input.get("id"))
            .ok_or(ValidationError::InvalidString { field: "id" })?;

        let display_name = non_empty_str(input.get("displayName")).ok_or(
            ValidationError::InvalidString {
                field: "displayName",
            },
        )?;

        let mut person = Person::new(id, display_name);

        if let Some(avatar) = input.get("avatar").filter(|v| is_truthy(v)) {
            if !is_string(avatar) {
                return Err(ValidationError::InvalidString { field: "avatar" });
            }
            person.avatar = avatar.as_str().map(str::to_string);
        }

        Ok(person)
    }
}

/// Validate a person record with the default rules.
pub fn validate_person(input: &Value) -> ValidationResult<Person> {
    PersonValidator.validate(input)
}
