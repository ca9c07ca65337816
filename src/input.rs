//! Loading payload documents for validation.

use crate::error::{InputError, InputResult};
use serde_json::Value;
use std::io::Read;

/// Read a JSON document from `reader`, refusing more than `limit` bytes.
pub fn read_payload<R: Read>(reader: R, limit: usize) -> InputResult<Value> {
    let mut buf = Vec::new();
    // One extra byte distinguishes "exactly at the limit" from "over it"
    reader.take((limit as u64).saturating_add(1)).read_to_end(&mut buf)?;
    if buf.len() > limit {
        return Err(InputError::TooLarge { limit });
    }
    Ok(serde_json::from_slice(&buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_payload() {
        let value = read_payload(&br#"{"conversationId":"c1"}"#[..], 1024).unwrap();
        assert_eq!(value, json!({"conversationId": "c1"}));
    }

    #[test]
    fn test_read_payload_at_limit() {
        let doc = br#""abc""#;
        assert!(read_payload(&doc[..], doc.len()).is_ok());
        assert!(matches!(
            read_payload(&doc[..], doc.len() - 1),
            Err(InputError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_read_payload_unbounded_limit() {
        let value = read_payload(&br#"{"a":1}"#[..], usize::MAX).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_read_payload_invalid_json() {
        assert!(matches!(
            read_payload(&b"{not json"[..], 1024),
            Err(InputError::Json(_))
        ));
    }
}
