//! Person model representing the sender of a communication notification.

use crate::validators::{PersonValidator, Validator};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A validated person record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Unique identifier for the person
    pub id: String,

    /// Name shown by the system for this person
    pub display_name: String,

    /// Avatar image location, only present when one was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Person {
    /// Create a new person without an avatar.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            avatar: None,
        }
    }

    /// Attach an avatar.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

// Serde support - deserialize through the person validator
impl<'de> Deserialize<'de> for Person {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        PersonValidator
            .validate(&value)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_person_serialization_omits_missing_avatar() {
        let person = Person::new("p1", "Ada");
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json, json!({"id": "p1", "displayName": "Ada"}));
    }

    #[test]
    fn test_person_serialization_with_avatar() {
        let person = Person::new("p1", "Ada").with_avatar("https://example.com/ada.png");
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json["avatar"], "https://example.com/ada.png");
    }

    #[test]
    fn test_person_deserialization_validates() {
        let person: Person =
            serde_json::from_value(json!({"id": "p1", "displayName": "Ada"})).unwrap();
        assert_eq!(person, Person::new("p1", "Ada"));

        let err = serde_json::from_value::<Person>(json!({"id": "", "displayName": "Ada"}))
            .unwrap_err();
        assert_eq!(err.to_string(), "'id' expected a valid string value.");
    }
}
