//! Shared angle math for the qth geodesy and grid crates.
//!
//! Provides:
//! - Degree/radian conversion and angle normalization
//! - Degrees-minutes-seconds formatting
//! - The [`Coordinate`] value type (latitude, longitude in degrees)
//! - The [`ErrorKind`] classification shared by every crate's error enum

pub mod angle;
pub mod coordinate;
pub mod error;

pub use angle::{
    Dms, deg_to_dms, deg_to_rad, dms_to_deg, normalize_180, normalize_360, rad_to_deg,
};
pub use coordinate::Coordinate;
pub use error::{CoordError, ErrorKind};
