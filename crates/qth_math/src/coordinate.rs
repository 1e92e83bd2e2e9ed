//! Geographic coordinate value type.

use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::deg_to_rad;
use crate::error::CoordError;

/// A point on the Earth's surface in decimal degrees.
///
/// Latitude is north positive, longitude east positive. Longitude is not
/// required to lie in [-180, 180]; solvers work with longitude differences
/// and never assume the inputs were pre-normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// Geodetic latitude in degrees. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees.
    pub longitude_deg: f64,
}

impl Coordinate {
    /// Create a coordinate without validation.
    pub const fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Create a coordinate, rejecting non-finite values and latitudes
    /// outside [-90, 90].
    pub fn try_new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, CoordError> {
        let coord = Self::new(latitude_deg, longitude_deg);
        coord.validate()?;
        Ok(coord)
    }

    /// Check the latitude range and that both components are finite.
    pub fn validate(&self) -> Result<(), CoordError> {
        if !self.latitude_deg.is_finite() {
            return Err(CoordError::NotFinite { axis: "latitude" });
        }
        if !self.longitude_deg.is_finite() {
            return Err(CoordError::NotFinite { axis: "longitude" });
        }
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(CoordError::LatitudeOutOfRange(self.latitude_deg));
        }
        Ok(())
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        deg_to_rad(self.latitude_deg)
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        deg_to_rad(self.longitude_deg)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude_deg, longitude_deg): (f64, f64)) -> Self {
        Self::new(latitude_deg, longitude_deg)
    }
}

/// Build a coordinate from a `[latitude, longitude]` slice.
///
/// Any other length is rejected; the values themselves are validated with
/// [`Coordinate::try_new`].
impl TryFrom<&[f64]> for Coordinate {
    type Error = CoordError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match values {
            [lat, lon] => Self::try_new(*lat, *lon),
            _ => Err(CoordError::WrongArity(values.len())),
        }
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude_deg, self.longitude_deg)
    }
}
