//! Serde helper functions for the upstream props payload.
//!
//! The calendar page serializes unclaimed days with `null` (or no key at all)
//! for their text fields. These helpers fold both into an empty string so the
//! rest of the pipeline only has to check `is_empty()`.

use serde::{Deserialize, Deserializer};

/// Deserialize a string, treating `null` as an empty string.
///
/// Combine with `#[serde(default)]` to also accept a missing key.
pub fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_string_or_null")]
        string_field: String,
    }

    #[test]
    fn test_deserialize_string_value() {
        let json = r#"{"string_field": "hello"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, "hello");
    }

    #[test]
    fn test_deserialize_string_null() {
        let json = r#"{"string_field": null}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, "");
    }

    #[test]
    fn test_deserialize_string_missing() {
        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(result.string_field, "");
    }

    #[test]
    fn test_deserialize_string_wrong_type() {
        let json = r#"{"string_field": 12}"#;
        assert!(serde_json::from_str::<TestStruct>(json).is_err());
    }
}
