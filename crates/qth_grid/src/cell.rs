//! Geographic extent of a decoded locator.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use qth_math::Coordinate;

/// Rectangle covered by a locator, anchored at its south-west corner.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridCell {
    /// Latitude of the southern edge in degrees.
    pub south_deg: f64,
    /// Longitude of the western edge in degrees.
    pub west_deg: f64,
    /// Cell height in degrees of latitude.
    pub lat_span_deg: f64,
    /// Cell width in degrees of longitude.
    pub lon_span_deg: f64,
    pub(crate) precision: u8,
}

impl GridCell {
    /// Number of character pairs that produced this cell (1..=6).
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// South-west corner.
    pub fn south_west(&self) -> Coordinate {
        Coordinate::new(self.south_deg, self.west_deg)
    }

    /// North-east corner.
    pub fn north_east(&self) -> Coordinate {
        Coordinate::new(
            self.south_deg + self.lat_span_deg,
            self.west_deg + self.lon_span_deg,
        )
    }

    /// Center of the cell.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            self.south_deg + self.lat_span_deg / 2.0,
            self.west_deg + self.lon_span_deg / 2.0,
        )
    }

    /// Whether `coord` lies inside the cell. Southern and western edges are
    /// inclusive, northern and eastern edges exclusive.
    pub fn contains(&self, coord: Coordinate) -> bool {
        let ne = self.north_east();
        coord.latitude_deg >= self.south_deg
            && coord.latitude_deg < ne.latitude_deg
            && coord.longitude_deg >= self.west_deg
            && coord.longitude_deg < ne.longitude_deg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> GridCell {
        GridCell {
            south_deg: 40.0,
            west_deg: -74.0,
            lat_span_deg: 1.0,
            lon_span_deg: 2.0,
            precision: 2,
        }
    }

    #[test]
    fn corners_and_center() {
        let cell = square();
        assert_eq!(cell.south_west(), Coordinate::new(40.0, -74.0));
        assert_eq!(cell.north_east(), Coordinate::new(41.0, -72.0));
        assert_eq!(cell.center(), Coordinate::new(40.5, -73.0));
    }

    #[test]
    fn contains_is_half_open() {
        let cell = square();
        assert!(cell.contains(Coordinate::new(40.0, -74.0)));
        assert!(cell.contains(Coordinate::new(40.999, -72.001)));
        assert!(!cell.contains(Coordinate::new(41.0, -73.0)));
        assert!(!cell.contains(Coordinate::new(40.5, -72.0)));
    }
}
