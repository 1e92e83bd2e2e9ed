//! Error types for distance solvers.

use qth_math::{CoordError, ErrorKind};
use thiserror::Error;

/// Errors from the geodesic solvers.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GeodesyError {
    /// An input point is not a usable coordinate.
    #[error(transparent)]
    InvalidCoordinate(#[from] CoordError),
    /// Earth model parameters are unusable.
    #[error("invalid earth model: {0}")]
    InvalidModel(&'static str),
    /// The Vincenty iteration did not settle within its budget.
    ///
    /// Happens for nearly antipodal points; the distance is undefined.
    #[error("no convergence after {iterations} iterations")]
    NoConvergence { iterations: u32 },
}

impl GeodesyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCoordinate(e) => e.kind(),
            Self::InvalidModel(_) => ErrorKind::InvalidArgument,
            Self::NoConvergence { .. } => ErrorKind::NumericNonConvergence,
        }
    }
}
