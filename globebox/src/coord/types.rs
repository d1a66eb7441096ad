use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{to_degrees, to_radians};

/// Minimum latitude in degrees.
pub const MIN_LAT: f64 = -90.0;

/// Maximum latitude in degrees.
pub const MAX_LAT: f64 = 90.0;

/// Minimum longitude in degrees (inclusive on input, folded onto +180).
pub const MIN_LON: f64 = -180.0;

/// Maximum longitude in degrees.
pub const MAX_LON: f64 = 180.0;

/// Errors that can occur when building geographic points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    /// Latitude outside [-90, 90] degrees or not a number.
    #[error("Invalid latitude: {0} (expected -90 to 90 degrees)")]
    InvalidLatitude(f64),

    /// Longitude outside [-180, 180] degrees or not a number.
    #[error("Invalid longitude: {0} (expected -180 to 180 degrees)")]
    InvalidLongitude(f64),

    /// Text could not be parsed as `lat,lon`.
    #[error("Invalid point '{0}': expected 'lat,lon' in degrees")]
    Parse(String),
}

/// A point on the globe surface, in radians.
///
/// Longitude is kept in (−π, π]. Points come from an external picking step
/// (screen position projected onto the ellipsoid), so no validation happens in
/// [`GeoPoint::new`]; use [`GeoPoint::from_degrees`] for user input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in radians (positive north).
    pub latitude: f64,
    /// Longitude in radians (positive east).
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point from radians without validation.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create a point from degrees, validating ranges.
    ///
    /// A longitude of exactly -180° is folded onto +180° so the result stays in
    /// (−π, π].
    pub fn from_degrees(lat: f64, lon: f64) -> Result<Self, CoordError> {
        if !(MIN_LAT..=MAX_LAT).contains(&lat) {
            return Err(CoordError::InvalidLatitude(lat));
        }
        if !(MIN_LON..=MAX_LON).contains(&lon) {
            return Err(CoordError::InvalidLongitude(lon));
        }

        // Both ends of the longitude range are the date line
        let longitude = if lon.abs() == MAX_LON {
            PI
        } else {
            to_radians(lon)
        };

        Ok(Self {
            latitude: to_radians(lat),
            longitude,
        })
    }

    /// Latitude in degrees.
    pub fn lat_degrees(&self) -> f64 {
        to_degrees(self.latitude)
    }

    /// Longitude in degrees.
    pub fn lon_degrees(&self) -> f64 {
        to_degrees(self.longitude)
    }

    /// Whether both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4},{:.4}", self.lat_degrees(), self.lon_degrees())
    }
}

impl FromStr for GeoPoint {
    type Err = CoordError;

    /// Parse `lat,lon` in degrees, e.g. `51.5,-0.12`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| CoordError::Parse(s.to_string()))?;

        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| CoordError::Parse(s.to_string()))?;
        let lon: f64 = lon
            .trim()
            .parse()
            .map_err(|_| CoordError::Parse(s.to_string()))?;

        Self::from_degrees(lat, lon)
    }
}

/// Which side of the prime meridian a longitude lies on.
///
/// A longitude of exactly zero has no sign; transitions involving it are left
/// unclassified by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LonSign {
    /// Longitude > 0 (eastern hemisphere).
    Positive,
    /// Longitude < 0 (western hemisphere).
    Negative,
}

impl LonSign {
    /// Classify a longitude. Returns `None` for zero and NaN.
    pub fn of(longitude: f64) -> Option<Self> {
        if longitude > 0.0 {
            Some(LonSign::Positive)
        } else if longitude < 0.0 {
            Some(LonSign::Negative)
        } else {
            None
        }
    }
}

impl fmt::Display for LonSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LonSign::Positive => write!(f, "+"),
            LonSign::Negative => write!(f, "-"),
        }
    }
}
