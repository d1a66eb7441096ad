//! Geographic rectangles built from two drag corners.
//!
//! A [`Rectangle`] stores its bounds in radians. When the box straddles the
//! date line the ordering is inverted (`east < west`), which is the signal
//! renderers use to draw the box the long way round the globe.

use std::f64::consts::TAU;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coord::{to_degrees, GeoPoint};

/// Default minimum angular size in radians (1e-7, roughly 0.6 m).
///
/// Anything thinner than this is grown so the box never has zero area.
pub const DEFAULT_EPSILON: f64 = 1e-7;

/// A geographic rectangle in radians.
///
/// Invariant: `south <= north`. `west <= east` unless the rectangle crosses
/// the date line, in which case `east < west`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Northern bound (radians).
    pub north: f64,
    /// Southern bound (radians).
    pub south: f64,
    /// Eastern bound (radians).
    pub east: f64,
    /// Western bound (radians).
    pub west: f64,
}

impl Rectangle {
    /// Create a rectangle from raw bounds without normalization.
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Build the rectangle spanned by two drag corners.
    ///
    /// `crossing` selects the east/west ordering: when set, east takes the
    /// smaller longitude and west the larger. Widths or heights below
    /// `epsilon` are grown on the east/north side so each span ends up at
    /// least `2 * epsilon`.
    pub fn from_corners(
        anchor: &GeoPoint,
        current: &GeoPoint,
        crossing: bool,
        epsilon: f64,
    ) -> Self {
        let (low_lon, high_lon) = min_max(anchor.longitude, current.longitude);
        let (south, north) = min_max(anchor.latitude, current.latitude);

        let (east, west) = if crossing {
            (low_lon, high_lon)
        } else {
            (high_lon, low_lon)
        };

        let mut rect = Self {
            north,
            south,
            east,
            west,
        };
        rect.ensure_min_size(crossing, epsilon);
        rect
    }

    /// Grow degenerate spans so neither width nor height falls below
    /// `2 * epsilon`.
    fn ensure_min_size(&mut self, crossing: bool, epsilon: f64) {
        // A crossing box is measured the long way, so east stays below west.
        let wrap = if crossing { TAU } else { 0.0 };

        if self.east + wrap - self.west < epsilon {
            self.east = grow(self.west - wrap, self.east, epsilon);
        }
        if self.north - self.south < epsilon {
            self.north = grow(self.south, self.north, epsilon);
        }
    }

    /// Whether the rectangle straddles the date line.
    pub fn crosses_date_line(&self) -> bool {
        self.east < self.west
    }

    /// Angular width in radians, measured eastward from `west` to `east`.
    pub fn width(&self) -> f64 {
        if self.crosses_date_line() {
            self.east - self.west + TAU
        } else {
            self.east - self.west
        }
    }

    /// Angular height in radians.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Whether all four bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.north.is_finite()
            && self.south.is_finite()
            && self.east.is_finite()
            && self.west.is_finite()
    }

    /// Whether a point falls inside the rectangle (bounds inclusive).
    pub fn contains(&self, point: &GeoPoint) -> bool {
        if point.latitude < self.south || point.latitude > self.north {
            return false;
        }
        if self.crosses_date_line() {
            point.longitude >= self.west || point.longitude <= self.east
        } else {
            point.longitude >= self.west && point.longitude <= self.east
        }
    }

    /// Bounds in degrees as `(north, south, east, west)`.
    pub fn to_degrees(&self) -> (f64, f64, f64, f64) {
        (
            to_degrees(self.north),
            to_degrees(self.south),
            to_degrees(self.east),
            to_degrees(self.west),
        )
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (north, south, east, west) = self.to_degrees();
        write!(
            f,
            "N{:.4} S{:.4} E{:.4} W{:.4}{}",
            north,
            south,
            east,
            west,
            if self.crosses_date_line() {
                " (date line)"
            } else {
                ""
            }
        )
    }
}

fn min_max(a: f64, b: f64) -> (f64, f64) {
    (a.min(b), a.max(b))
}

/// Push `high` up by `2 * epsilon`, then step it one ulp at a time while
/// rounding still leaves the span short.
fn grow(low: f64, high: f64, epsilon: f64) -> f64 {
    let target = 2.0 * epsilon;
    let mut high = high + target;
    while high - low < target {
        high = high.next_up();
    }
    high
}
