//! Persisted bounding box model.
//!
//! The drawing tool hands its result to a search filter as four degree values
//! rounded to a fixed number of decimals. Bounds are optional because a model
//! exists before anything has been drawn.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PRECISION;
use crate::coord::{round_to, to_radians};
use crate::rectangle::Rectangle;

/// Degree-valued bounding box as stored for filter construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BboxModel {
    /// Northern bound in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub north: Option<f64>,
    /// Southern bound in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub south: Option<f64>,
    /// Eastern bound in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub east: Option<f64>,
    /// Western bound in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub west: Option<f64>,
}

impl BboxModel {
    /// A model with no bounds set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a model from degree values.
    pub fn from_degrees(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north: Some(north),
            south: Some(south),
            east: Some(east),
            west: Some(west),
        }
    }

    /// Convert a rectangle to degrees rounded to `precision` decimal places.
    pub fn from_rectangle(rect: &Rectangle, precision: u32) -> Self {
        let (north, south, east, west) = rect.to_degrees();
        Self::from_degrees(
            round_to(north, precision),
            round_to(south, precision),
            round_to(east, precision),
            round_to(west, precision),
        )
    }

    /// Convert a rectangle using the default precision of 4 decimal places.
    pub fn from_rectangle_default(rect: &Rectangle) -> Self {
        Self::from_rectangle(rect, DEFAULT_PRECISION)
    }

    /// Whether no bound is set.
    pub fn is_empty(&self) -> bool {
        self.north.is_none() && self.south.is_none() && self.east.is_none() && self.west.is_none()
    }

    /// Convert back to a rectangle in radians.
    ///
    /// Returns `None` when any bound is missing or not finite: there is no
    /// valid rectangle yet.
    pub fn to_rectangle(&self) -> Option<Rectangle> {
        let north = finite(self.north)?;
        let south = finite(self.south)?;
        let east = finite(self.east)?;
        let west = finite(self.west)?;

        Some(Rectangle::new(
            to_radians(north),
            to_radians(south),
            to_radians(east),
            to_radians(west),
        ))
    }

    /// Whether the model describes a box with non-zero width and height.
    ///
    /// Sub-precision drags round to equal bounds and are not worth drawing.
    pub fn is_drawable(&self) -> bool {
        self.to_rectangle()
            .is_some_and(|r| r.north != r.south && r.east != r.west)
    }

    /// Serialize to a JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse from a JSON object.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
