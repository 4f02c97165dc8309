//! Attaching behavior to plain parsed data.
//!
//! A [`Behavior`] is a static table of named operations. [`attach`] pairs a
//! parsed [`Value`] with a table without copying or reshaping the data, so
//! the result carries every original field plus the table's operations.

use std::fmt;

use kata_common::warning::warn_once;
use serde_json::Value;

use crate::error::JsonError;
use crate::json::parse;

/// An operation over the plain data it is attached to.
pub type Operation = fn(&Value) -> Result<Value, JsonError>;

/// A named set of operations.
pub struct Behavior {
    name: &'static str,
    operations: &'static [(&'static str, Operation)],
}

impl Behavior {
    /// Define a behavior table.
    #[must_use]
    pub const fn new(
        name: &'static str,
        operations: &'static [(&'static str, Operation)],
    ) -> Self {
        Self { name, operations }
    }

    /// Name used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Look up an operation by name.
    #[must_use]
    pub fn operation(&self, name: &str) -> Option<Operation> {
        self.operations
            .iter()
            .find(|(op, _)| *op == name)
            .map(|&(_, f)| f)
    }

    /// Names of all operations, in table order.
    pub fn operation_names(&self) -> impl Iterator<Item = &'static str> {
        self.operations.iter().map(|&(name, _)| name)
    }
}

impl fmt::Debug for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Behavior")
            .field("name", &self.name)
            .field("operations", &self.operation_names().collect::<Vec<_>>())
            .finish()
    }
}

/// Plain data paired with a behavior table.
#[derive(Debug, Clone)]
pub struct Typed {
    data: Value,
    behavior: &'static Behavior,
}

impl Typed {
    /// The data exactly as it was attached.
    #[must_use]
    pub const fn data(&self) -> &Value {
        &self.data
    }

    /// Drop the behavior and keep the data.
    #[must_use]
    pub fn into_data(self) -> Value {
        self.data
    }

    /// The attached behavior table.
    #[must_use]
    pub const fn behavior(&self) -> &'static Behavior {
        self.behavior
    }

    /// Whether the attached behavior defines `operation`.
    #[must_use]
    pub fn responds_to(&self, operation: &str) -> bool {
        self.behavior.operation(operation).is_some()
    }

    /// Run a behavior operation against the data.
    ///
    /// # Errors
    ///
    /// Returns [`JsonError::UnknownOperation`] if the behavior has no such
    /// operation, or whatever error the operation itself reports.
    pub fn call(&self, operation: &str) -> Result<Value, JsonError> {
        let op = self
            .behavior
            .operation(operation)
            .ok_or_else(|| JsonError::UnknownOperation {
                behavior: self.behavior.name,
                operation: operation.to_string(),
            })?;
        op(&self.data)
    }
}

/// Give plain data the operations in `behavior`.
///
/// Non-object data is accepted but reported once, since field-reading
/// operations will fail on it.
#[must_use]
pub fn attach(data: Value, behavior: &'static Behavior) -> Typed {
    if !data.is_object() {
        warn_once(
            "Json",
            &format!("attaching {} behavior to non-object data", behavior.name),
        );
    }
    Typed { data, behavior }
}

/// Parse JSON text and attach `behavior` to the result.
///
/// # Errors
///
/// Returns [`JsonError::Malformed`] if `text` is not valid JSON.
pub fn from_json_with(text: &str, behavior: &'static Behavior) -> Result<Typed, JsonError> {
    Ok(attach(parse(text)?, behavior))
}

/// Read a numeric field from object data.
///
/// # Errors
///
/// Returns [`JsonError::Field`] if the field is missing or not a number.
pub fn number_field(data: &Value, field: &'static str) -> Result<f64, JsonError> {
    let value = data.get(field).ok_or(JsonError::Field {
        field,
        reason: "is missing",
    })?;
    value.as_f64().ok_or(JsonError::Field {
        field,
        reason: "is not a number",
    })
}
