//! Object Codec
//!
//! Serializes stored values to and from JSON bytes. Values are
//! `serde_json::Value`, a tagged variant over null/bool/number/string/
//! array/object, so the storage layer enforces no schema of its own.

use serde_json::Value;

use crate::error::Result;

/// Encode a value to its stored byte representation
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

/// Decode stored bytes back into a value
///
/// Fails with a codec error on malformed or corrupted bytes.
pub fn decode(bytes: &[u8]) -> Result<Value> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Parse user-supplied text into a value
///
/// Used on `set` to validate the payload is well-formed before any
/// storage access.
pub fn parse(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_decode_round_trip() {
        let value = json!({"x": 1, "nested": {"list": [1, 2, 3]}});
        let bytes = encode(&value).unwrap();
        assert_eq!(decode(&bytes).unwrap(), value);
    }

    #[test]
    fn test_decode_malformed_bytes() {
        let err = decode(b"{not json").unwrap_err();
        assert!(matches!(err, crate::KvPathError::Codec(_)));
    }

    #[test]
    fn test_parse_scalars_and_trees() {
        assert_eq!(parse("42").unwrap(), json!(42));
        assert_eq!(parse("\"text\"").unwrap(), json!("text"));
        assert_eq!(parse("[true, null]").unwrap(), json!([true, null]));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(parse("{\"x\":").is_err());
    }
}
