//! Loose runtime type predicates over untyped JSON values.
//!
//! Payloads reach the validators as `serde_json::Value`, so field checks
//! are expressed as predicates rather than as typed deserialization.

use serde_json::Value;

/// True for JSON objects only. Null, arrays and primitives are rejected.
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

/// True for JSON strings, including the empty string.
pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// JavaScript truthiness of a JSON value.
///
/// `null`, `false`, numeric zero and `""` are falsy. Every array and
/// object is truthy, including empty ones.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Returns the field's value when it is present and a non-empty string.
pub fn non_empty_str<'a>(value: Option<&'a Value>) -> Option<&'a str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
