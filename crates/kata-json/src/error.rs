//! Errors for JSON conversion and behavior calls.

use thiserror::Error;

/// Error type for the JSON helpers.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The input is not valid JSON text.
    #[error("malformed JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The input is valid JSON but does not fit the requested type.
    #[error("JSON does not match the expected shape: {0}")]
    Mismatch(#[source] serde_json::Error),

    /// The value could not be serialized.
    #[error("failed to serialize value: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A behavior was asked for an operation it does not define.
    #[error("{behavior} has no operation named {operation:?}")]
    UnknownOperation {
        /// Name of the behavior table.
        behavior: &'static str,
        /// The operation that was requested.
        operation: String,
    },

    /// A behavior operation found a missing or mistyped field.
    #[error("field {field:?} {reason}")]
    Field {
        /// The field the operation needed.
        field: &'static str,
        /// What was wrong with it.
        reason: &'static str,
    },
}

impl JsonError {
    /// Sort a deserialization error into syntax and shape failures.
    pub(crate) fn from_parse(err: serde_json::Error) -> Self {
        if err.is_data() {
            Self::Mismatch(err)
        } else {
            Self::Malformed(err)
        }
    }
}
