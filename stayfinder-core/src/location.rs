//! Validated geographic positions and great-circle distance.
//!
//! Coordinates are WGS84 with `x = longitude` and `y = latitude`, matching
//! the axis convention of the `geo` crate. A listing either carries a full
//! [`GeoPoint`] or no position at all; a real listing at `(0, 0)` is never
//! confused with "not geo-tagged".

use geo::Coord;
use thiserror::Error;

/// Mean Earth radius in kilometres used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A validated latitude/longitude pair in decimal degrees.
///
/// # Examples
/// ```
/// use stayfinder_core::GeoPoint;
///
/// # fn main() -> Result<(), stayfinder_core::GeoPointError> {
/// let bangalore = GeoPoint::new(12.9716, 77.5946)?;
/// assert_eq!(bangalore.latitude(), 12.9716);
/// assert_eq!(bangalore.longitude(), 77.5946);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    coord: Coord<f64>,
}

/// Errors returned by [`GeoPoint::new`].
#[derive(Debug, Error, PartialEq)]
pub enum GeoPointError {
    /// Latitude or longitude was `NaN` or infinite.
    #[error("coordinates must be finite")]
    NonFinite,
    /// Latitude fell outside `-90..=90` degrees.
    #[error("latitude {latitude} is outside -90..=90")]
    LatitudeOutOfRange {
        /// The rejected latitude in decimal degrees.
        latitude: f64,
    },
    /// Longitude fell outside `-180..=180` degrees.
    #[error("longitude {longitude} is outside -180..=180")]
    LongitudeOutOfRange {
        /// The rejected longitude in decimal degrees.
        longitude: f64,
    },
}

impl GeoPoint {
    /// Validates and constructs a [`GeoPoint`] from decimal degrees.
    ///
    /// # Errors
    /// Returns [`GeoPointError`] for non-finite values or values outside the
    /// WGS84 range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoPointError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(GeoPointError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoPointError::LatitudeOutOfRange { latitude });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoPointError::LongitudeOutOfRange { longitude });
        }
        Ok(Self {
            coord: Coord {
                x: longitude,
                y: latitude,
            },
        })
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.coord.y
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.coord.x
    }

    /// The underlying coordinate (`x = longitude`, `y = latitude`).
    #[must_use]
    pub const fn coord(&self) -> Coord<f64> {
        self.coord
    }
}

impl From<GeoPoint> for Coord<f64> {
    fn from(point: GeoPoint) -> Self {
        point.coord
    }
}

/// Great-circle distance between two points in kilometres.
///
/// Uses the haversine formula on a spherical Earth of radius
/// [`EARTH_RADIUS_KM`]. Symmetric in its arguments; `distance_km(a, a)` is
/// `0.0` up to floating-point error.
///
/// # Examples
/// ```
/// use stayfinder_core::{GeoPoint, distance_km};
///
/// # fn main() -> Result<(), stayfinder_core::GeoPointError> {
/// let a = GeoPoint::new(12.9716, 77.5946)?;
/// assert_eq!(distance_km(a, a), 0.0);
/// # Ok(())
/// # }
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "haversine is floating-point trigonometry"
)]
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.latitude().to_radians();
    let lat_b = b.latitude().to_radians();
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lon = (b.longitude() - a.longitude()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
