//! Plain shapes with a computed area.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::behavior::{Behavior, Operation, number_field};
use crate::error::JsonError;

/// Anything with an area.
pub trait Shape {
    /// Area in square units.
    fn area(&self) -> f64;
}

/// An axis-aligned rectangle. Serializes as `{"width":..,"height":..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Build a rectangle. Dimensions are stored as given.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

fn rectangle_area(data: &Value) -> Result<Value, JsonError> {
    let width = number_field(data, "width")?;
    let height = number_field(data, "height")?;
    Ok(Value::from(Rectangle::new(width, height).area()))
}

/// Rectangle operations over plain JSON data: `area`.
pub static RECTANGLE: Behavior =
    Behavior::new("Rectangle", &[("area", rectangle_area as Operation)]);
