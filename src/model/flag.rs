//! Lenient boolean flags for request bodies.
//!
//! HTML forms and older clients send flags as `1`/`0` or as strings, so flag fields accept
//! JSON booleans, the integers `0` and `1`, and the strings `"true"`, `"false"`, `"1"` and
//! `"0"`. `null` is treated the same as an omitted field.

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Parses a single flag value, returning `None` when the value is not a recognised flag.
pub fn parse(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// `deserialize_with` helper for `Option<bool>` flag fields
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => parse(&value).map(Some).ok_or_else(|| {
            de::Error::custom(format!(
                "invalid flag value {}, expected true, false, 1 or 0",
                value
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "super::deserialize")]
        flag: Option<bool>,
    }

    fn flag(body: serde_json::Value) -> Result<Option<bool>, serde_json::Error> {
        serde_json::from_value::<Body>(body).map(|b| b.flag)
    }

    #[test]
    fn accepts_booleans_numbers_and_strings() {
        assert_eq!(flag(json!({ "flag": true })).unwrap(), Some(true));
        assert_eq!(flag(json!({ "flag": 0 })).unwrap(), Some(false));
        assert_eq!(flag(json!({ "flag": "1" })).unwrap(), Some(true));
        assert_eq!(flag(json!({ "flag": "FALSE" })).unwrap(), Some(false));
    }

    #[test]
    fn missing_and_null_are_none() {
        assert_eq!(flag(json!({})).unwrap(), None);
        assert_eq!(flag(json!({ "flag": null })).unwrap(), None);
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(flag(json!({ "flag": "yes" })).is_err());
        assert!(flag(json!({ "flag": 2 })).is_err());
    }
}
