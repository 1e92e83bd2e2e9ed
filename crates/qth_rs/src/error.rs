//! Unified error for the convenience API.

use qth_geodesy::GeodesyError;
use qth_grid::LocatorError;
use qth_math::{CoordError, ErrorKind};
use thiserror::Error;

/// Any failure surfaced by the convenience functions.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum QthError {
    #[error(transparent)]
    Coordinate(#[from] CoordError),
    #[error(transparent)]
    Geodesy(#[from] GeodesyError),
    #[error(transparent)]
    Locator(#[from] LocatorError),
}

impl QthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Coordinate(e) => e.kind(),
            Self::Geodesy(e) => e.kind(),
            Self::Locator(e) => e.kind(),
        }
    }
}
