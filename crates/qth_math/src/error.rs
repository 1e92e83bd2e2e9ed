//! Error classification shared across the qth crates.

use thiserror::Error;

/// Coarse classification of every failure the qth crates can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input: wrong arity, non-finite value, out-of-range
    /// latitude or precision, malformed locator text.
    InvalidArgument,
    /// An iterative solver exhausted its iteration budget.
    NumericNonConvergence,
}

/// Errors from coordinate construction and validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CoordError {
    /// A coordinate must be exactly (latitude, longitude).
    #[error("coordinate requires exactly 2 values, got {0}")]
    WrongArity(usize),
    /// NaN or infinite component.
    #[error("{axis} is not finite")]
    NotFinite { axis: &'static str },
    /// Latitude outside [-90, 90].
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),
}

impl CoordError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_value() {
        let err = CoordError::LatitudeOutOfRange(91.5);
        assert!(err.to_string().contains("91.5"));
        assert_eq!(
            CoordError::WrongArity(3).to_string(),
            "coordinate requires exactly 2 values, got 3"
        );
    }

    #[test]
    fn all_coordinate_errors_are_invalid_argument() {
        assert_eq!(CoordError::WrongArity(1).kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            CoordError::NotFinite { axis: "longitude" }.kind(),
            ErrorKind::InvalidArgument
        );
    }
}
