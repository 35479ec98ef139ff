use crate::Result;
use serde_json::Value;

/// Decoder turning one raw message payload into a structured value.
///
/// Connector configs only carry the handle; the framework invokes it per
/// message at runtime. Builders never call `deserialize` themselves.
pub trait Scheme: Send + Sync {
    /// Stable identifier for this scheme, used when displaying configs.
    fn name(&self) -> &str;

    /// Decode one raw payload.
    fn deserialize(&self, payload: &[u8]) -> Result<Value>;
}

/// Passes payload bytes through as a UTF-8 string.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawScheme;

impl Scheme for RawScheme {
    fn name(&self) -> &str {
        "raw"
    }

    fn deserialize(&self, payload: &[u8]) -> Result<Value> {
        Ok(Value::String(String::from_utf8_lossy(payload).into_owned()))
    }
}

/// Decodes payloads as JSON documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonScheme;

impl Scheme for JsonScheme {
    fn name(&self) -> &str {
        "json"
    }

    fn deserialize(&self, payload: &[u8]) -> Result<Value> {
        Ok(serde_json::from_slice(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_scheme_passthrough() {
        let value = RawScheme.deserialize(b"hello world").unwrap();
        assert_eq!(value, json!("hello world"));
    }

    #[test]
    fn test_json_scheme_decodes_object() {
        let value = JsonScheme.deserialize(br#"{"word": "hello", "count": 3}"#).unwrap();
        assert_eq!(value, json!({"word": "hello", "count": 3}));
    }

    #[test]
    fn test_json_scheme_rejects_garbage() {
        assert!(JsonScheme.deserialize(b"not json").is_err());
    }
}
