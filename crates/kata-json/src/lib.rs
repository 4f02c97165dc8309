//! JSON helpers and shape factories for the kata workspace.
//!
//! - **Serialization** - [`to_json`] for any `Serialize` value
//! - **Parsing** - [`parse`] into plain data, [`from_json`] into a typed value
//! - **Behavior attachment** - [`attach`] pairs plain data with a [`Behavior`]
//!   table, the explicit stand-in for giving parsed data methods
//! - **Shapes** - [`Rectangle`] and its [`RECTANGLE`] behavior
//!
//! ```
//! use kata_json::{RECTANGLE, Rectangle, from_json_with, to_json};
//!
//! let text = to_json(&Rectangle::new(3.0, 4.0))?;
//! let rect = from_json_with(&text, &RECTANGLE)?;
//! assert_eq!(rect.call("area")?, 12.0);
//! # Ok::<(), kata_json::JsonError>(())
//! ```

/// Behavior tables and attached data.
pub mod behavior;
/// Error type.
pub mod error;
/// Serialization and parsing.
pub mod json;
/// Shapes with an area.
pub mod shape;

pub use behavior::{Behavior, Operation, Typed, attach, from_json_with, number_field};
pub use error::JsonError;
pub use json::{from_json, parse, to_json, to_json_pretty};
pub use shape::{RECTANGLE, Rectangle, Shape};
