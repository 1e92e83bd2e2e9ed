//! Distance and bearing between two points on the Earth.
//!
//! Three solvers, all pure functions over [`Coordinate`] pairs:
//! - [`haversine_distance_km`]: spherical great-circle distance
//! - [`ellipsoidal_distance_km`]: Vincenty inverse solution on WGS-84
//! - [`initial_bearing_deg`]: initial great-circle bearing from true north
//!
//! The spherical model is accurate to roughly 0.5 %; use the ellipsoidal
//! solver when long-distance accuracy matters, and handle its
//! [`GeodesyError::NoConvergence`] result for near-antipodal points.

pub mod bearing;
pub mod error;
pub mod haversine;
pub mod model;
pub mod vincenty;

pub use bearing::initial_bearing_deg;
pub use error::GeodesyError;
pub use haversine::{haversine_distance_km, haversine_distance_km_on};
pub use model::{Ellipsoid, Sphere};
pub use vincenty::{
    CONVERGENCE_TOLERANCE, MAX_ITERATIONS, VincentySolution, ellipsoidal_distance_km,
    ellipsoidal_distance_km_on, vincenty_inverse,
};

pub use qth_math::Coordinate;
