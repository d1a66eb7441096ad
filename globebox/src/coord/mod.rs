//! Geographic coordinate helpers
//!
//! Points handled by the tracker are in radians, the unit a globe renderer
//! hands back after picking. Degrees only appear at the edges: user input and
//! the persisted [`crate::model::BboxModel`].

mod types;

pub use types::{CoordError, GeoPoint, LonSign, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

use std::f64::consts::{PI, TAU};

/// Converts degrees to radians.
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Converts radians to degrees.
#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Folds a longitude in radians into (−π, π].
///
/// Non-finite input is returned unchanged.
pub fn normalize_longitude(longitude: f64) -> f64 {
    if !longitude.is_finite() {
        return longitude;
    }
    if longitude > -PI && longitude <= PI {
        return longitude;
    }

    let folded = (longitude + PI).rem_euclid(TAU) - PI;
    if folded <= -PI {
        folded + TAU
    } else {
        folded
    }
}

/// Rounds a value to a fixed number of decimal places.
///
/// Used when persisting degree values; 4 places is roughly 11 m at the
/// equator.
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
