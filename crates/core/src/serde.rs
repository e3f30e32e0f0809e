//! Serde helper functions for form and query deserialization.
//!
//! HTML forms and query strings send every value as text and send empty
//! strings for untouched inputs. These helpers treat empty values as absent.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional integer ID, treating empty strings as None.
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<IdValue> = Option::deserialize(deserializer)?;
    match value {
        Some(IdValue::Number(id)) => Ok(Some(id)),
        Some(IdValue::Text(s)) if !s.trim().is_empty() => s
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Deserialize an active flag sent as `1`/`0`, `true`/`false` or `on`/`off`.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match FlagValue::deserialize(deserializer)? {
        FlagValue::Bool(b) => Ok(b),
        FlagValue::Number(n) => Ok(n != 0),
        FlagValue::Text(s) => match s.trim().to_lowercase().as_str() {
            "1" | "true" | "on" => Ok(true),
            "0" | "false" | "off" | "" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "invalid flag value: {other}"
            ))),
        },
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdValue {
    Number(i64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagValue {
    Bool(bool),
    Number(i64),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test struct that uses the deserializer functions
    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_id")]
        id_field: Option<i64>,
        #[serde(default, deserialize_with = "deserialize_flag")]
        flag_field: bool,
    }

    #[test]
    fn test_deserialize_optional_id_text() {
        let json = r#"{"id_field": "12"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.id_field, Some(12));
    }

    #[test]
    fn test_deserialize_optional_id_number() {
        let json = r#"{"id_field": 12}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.id_field, Some(12));
    }

    #[test]
    fn test_deserialize_optional_id_empty() {
        let json = r#"{"id_field": ""}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.id_field, None);
    }

    #[test]
    fn test_deserialize_optional_id_missing() {
        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(result.id_field, None);
        assert!(!result.flag_field);
    }

    #[test]
    fn test_deserialize_optional_id_invalid() {
        let json = r#"{"id_field": "abc"}"#;
        let result: Result<TestStruct, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_flag_variants() {
        for (json, expected) in [
            (r#"{"flag_field": "1"}"#, true),
            (r#"{"flag_field": "0"}"#, false),
            (r#"{"flag_field": "true"}"#, true),
            (r#"{"flag_field": "off"}"#, false),
            (r#"{"flag_field": 1}"#, true),
            (r#"{"flag_field": false}"#, false),
        ] {
            let result: TestStruct = serde_json::from_str(json).unwrap();
            assert_eq!(result.flag_field, expected, "input: {json}");
        }
    }

    #[test]
    fn test_deserialize_flag_invalid() {
        let json = r#"{"flag_field": "maybe"}"#;
        let result: Result<TestStruct, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
