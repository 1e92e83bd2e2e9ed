//! Convenience wrapper for the qth geodesy and grid locator crates.
//!
//! Every function takes plain decimal degrees, so callers never need to
//! build [`Coordinate`] values or pick an earth model.
//!
//! # Quick start
//!
//! ```
//! use qth_rs::*;
//!
//! let km = haversine_distance_km(40.7128, -74.0060, 51.5074, -0.1278);
//! assert!((km - 5570.22).abs() < 0.01);
//!
//! let grid = encode_locator(40.645246, -73.785112, 3)?;
//! assert_eq!(grid, "FN30CP");
//!
//! let (lat, lon) = decode_locator(&grid)?;
//! assert!((lat - 40.6458).abs() < 1e-3 && (lon + 73.7917).abs() < 1e-3);
//! # Ok::<(), qth_rs::QthError>(())
//! ```

pub mod convenience;
pub mod error;

pub use convenience::{
    decode_locator, ellipsoidal_distance_km, encode_locator, haversine_distance_km,
    initial_bearing_deg,
};
pub use error::QthError;

// Re-export the typed APIs so callers only need `qth_rs`.
pub use qth_geodesy::{Ellipsoid, GeodesyError, Sphere, VincentySolution, vincenty_inverse};
pub use qth_grid::{GridCell, LocatorError, decode_locator_cell};
pub use qth_math::{CoordError, Coordinate, Dms, ErrorKind, deg_to_dms};
