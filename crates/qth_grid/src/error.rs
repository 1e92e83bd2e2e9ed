//! Error types for locator encoding and decoding.

use qth_math::{CoordError, ErrorKind};
use thiserror::Error;

/// Errors from encoding or decoding a Maidenhead locator.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum LocatorError {
    /// Requested precision outside 1..=6 pairs.
    #[error("precision {0} outside 1..=6")]
    InvalidPrecision(u8),
    /// Locator text length is not an even number between 2 and 12.
    #[error("locator requires an even number of characters between 2 and 12, got {0}")]
    InvalidLength(usize),
    /// A character outside its pair's alphabet.
    #[error("invalid character {found:?} at position {position}")]
    InvalidCharacter { position: usize, found: char },
    /// Locator bytes are not valid UTF-8 text.
    #[error("locator is not valid UTF-8 text")]
    NotUtf8,
    /// The coordinate to encode is unusable.
    #[error(transparent)]
    InvalidCoordinate(#[from] CoordError),
}

impl LocatorError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}
