use comm_info_validator::{ValidationError, ValidationResult, Validator};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Mock sender validator for testing.
///
/// Records every value it is handed and either echoes the value back or
/// fails with a configured reason.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockPersonValidator {
    failure: Option<String>,
    calls: Arc<Mutex<Vec<Value>>>,
}

#[allow(dead_code)]
impl MockPersonValidator {
    /// Create a mock that accepts every sender.
    pub fn accepting() -> Self {
        Self::default()
    }

    /// Create a mock that rejects every sender with `reason`.
    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::default()
        }
    }

    /// Number of times `validate` was called.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The values passed to `validate`, in call order.
    pub fn received(&self) -> Vec<Value> {
        self.calls.lock().unwrap().clone()
    }
}

impl Validator for MockPersonValidator {
    type Output = Value;

    fn validate(&self, input: &Value) -> ValidationResult<Value> {
        self.calls.lock().unwrap().push(input.clone());
        match &self.failure {
            Some(reason) => Err(ValidationError::Message(reason.clone())),
            None => Ok(input.clone()),
        }
    }
}
