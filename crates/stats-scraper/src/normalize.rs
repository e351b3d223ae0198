//! Vendor JSON cleanup.
//!
//! Vendors have been seen emitting keys with stray whitespace (`"playCount "`),
//! so every object key is trimmed before typed deserialization.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::Result;

/// Recursively trim whitespace from object keys
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.trim().to_string(), normalize_keys(value)))
                .collect::<Map<_, _>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}

/// Deserialize a vendor payload after key normalization
pub fn from_vendor_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(normalize_keys(value))?)
}

/// Parse a vendor response body after key normalization
pub fn from_vendor_str<T: DeserializeOwned>(body: &str) -> Result<T> {
    from_vendor_value(serde_json::from_str(body)?)
}
