//! Maidenhead grid locators.
//!
//! A locator is a string of 1 to 6 character pairs. Each pair refines the
//! previous one; the first character of a pair encodes longitude and the
//! second latitude:
//!
//! | Pair | Name | Symbols | Longitude span | Latitude span |
//! |------|------|---------|----------------|---------------|
//! | 1 | field | `A`–`R` | 20° | 10° |
//! | 2 | square | `0`–`9` | 2° | 1° |
//! | 3 | subsquare | `A`–`X` | 5′ | 2.5′ |
//! | 4 | extended square | `0`–`9` | 30″ | 15″ |
//! | 5 | extended subsquare | `A`–`X` | 1.25″ | 0.625″ |
//! | 6 | extended square | `0`–`9` | 0.125″ | 0.0625″ |
//!
//! Both directions are driven by the same table, [`PAIRS`].
//!
//! ```
//! use qth_grid::{decode_locator, encode_locator};
//! use qth_math::Coordinate;
//!
//! let jfk = Coordinate::new(40.645246, -73.785112);
//! assert_eq!(encode_locator(jfk, 3)?, "FN30CP");
//!
//! let center = decode_locator("fn30cp")?;
//! assert!((center.latitude_deg - 40.6458).abs() < 1e-3);
//! # Ok::<(), qth_grid::LocatorError>(())
//! ```

pub mod cell;
pub mod decode;
pub mod encode;
pub mod error;
pub mod table;

pub use cell::GridCell;
pub use decode::{decode_locator, decode_locator_bytes, decode_locator_cell};
pub use encode::encode_locator;
pub use error::LocatorError;
pub use table::{
    LAT_UNITS_PER_DEG, LON_UNITS_PER_DEG, MAX_LOCATOR_LEN, MAX_PRECISION, MIN_PRECISION, PAIRS,
    PairLayout, Symbols,
};
