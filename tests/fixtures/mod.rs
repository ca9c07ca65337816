//! Sample payloads shared by the integration tests.

use serde_json::{json, Value};

/// A person record that passes the built-in person validator.
pub fn valid_person() -> Value {
    json!({
        "id": "person_1",
        "displayName": "Ada Lovelace",
        "avatar": "https://example.com/ada.png"
    })
}

/// A complete communication info payload with a body.
pub fn valid_payload() -> Value {
    json!({
        "conversationId": "c1",
        "sender": valid_person(),
        "body": "hi"
    })
}

/// `valid_payload` with `field` replaced by `value`.
#[allow(dead_code)]
pub fn payload_with(field: &str, value: Value) -> Value {
    let mut payload = valid_payload();
    payload[field] = value;
    payload
}

/// `valid_payload` with `field` removed.
#[allow(dead_code)]
pub fn payload_without(field: &str) -> Value {
    let mut payload = valid_payload();
    if let Some(obj) = payload.as_object_mut() {
        obj.remove(field);
    }
    payload
}
