//! Thin wrappers over `serde_json`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::JsonError;

/// Serialize any value to compact JSON text.
///
/// Derived structs emit their fields in declaration order.
///
/// # Errors
///
/// Returns [`JsonError::Serialize`] if the value's `Serialize` impl fails,
/// e.g. a map with non-string keys.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Serialize)
}

/// Serialize any value to indented JSON text.
///
/// # Errors
///
/// Same as [`to_json`].
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string_pretty(value).map_err(JsonError::Serialize)
}

/// Parse JSON text into a plain structured value.
///
/// # Errors
///
/// Returns [`JsonError::Malformed`] if `text` is not valid JSON.
pub fn parse(text: &str) -> Result<Value, JsonError> {
    serde_json::from_str(text).map_err(JsonError::Malformed)
}

/// Parse JSON text straight into a typed value.
///
/// # Errors
///
/// Returns [`JsonError::Malformed`] for invalid JSON and
/// [`JsonError::Mismatch`] when the JSON does not fit `T`.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, JsonError> {
    serde_json::from_str(text).map_err(JsonError::from_parse)
}
