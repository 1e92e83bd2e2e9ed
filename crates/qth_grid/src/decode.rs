//! Locator to coordinate.

use qth_math::Coordinate;
use tracing::debug;

use crate::cell::GridCell;
use crate::error::LocatorError;
use crate::table::{LAT_UNITS_PER_DEG, LON_UNITS_PER_DEG, MAX_LOCATOR_LEN, PAIRS};

/// Decode a locator to the center of its cell.
///
/// Input is case-insensitive and surrounding whitespace is ignored.
pub fn decode_locator(locator: &str) -> Result<Coordinate, LocatorError> {
    Ok(decode_locator_cell(locator)?.center())
}

/// Decode raw bytes, rejecting anything that is not UTF-8 text.
pub fn decode_locator_bytes(locator: &[u8]) -> Result<Coordinate, LocatorError> {
    let text = std::str::from_utf8(locator).map_err(|_| LocatorError::NotUtf8)?;
    decode_locator(text)
}

/// Decode a locator to the full cell it names.
///
/// Fails when the trimmed text is shorter than 2, longer than 12, of odd
/// length, or contains a character outside its pair's alphabet (`A`–`R`
/// for the field, `A`–`X` for subsquares, `0`–`9` for squares).
pub fn decode_locator_cell(locator: &str) -> Result<GridCell, LocatorError> {
    parse_cell(locator).inspect_err(|err| debug!(locator, %err, "rejected grid locator"))
}

fn parse_cell(locator: &str) -> Result<GridCell, LocatorError> {
    let grid = locator.trim();
    let len = grid.chars().count();
    if !(2..=MAX_LOCATOR_LEN).contains(&len) || len % 2 != 0 {
        return Err(LocatorError::InvalidLength(len));
    }

    let pair_count = len / 2;
    let mut chars = grid.chars().map(|c| c.to_ascii_uppercase()).enumerate();
    // South-west corner counted in finest cells from (-90, -180).
    let mut west_units = 0_u32;
    let mut south_units = 0_u32;

    for pair in &PAIRS[..pair_count] {
        for axis_units in [&mut west_units, &mut south_units] {
            // Length was checked above, so the iterator cannot run dry.
            let Some((position, found)) = chars.next() else {
                return Err(LocatorError::InvalidLength(len));
            };
            let value = pair
                .value(found)
                .ok_or(LocatorError::InvalidCharacter { position, found })?;
            *axis_units += u32::from(value) * pair.units;
        }
    }

    let finest = &PAIRS[pair_count - 1];
    Ok(GridCell {
        south_deg: units_to_deg(south_units, LAT_UNITS_PER_DEG, 90),
        west_deg: units_to_deg(west_units, LON_UNITS_PER_DEG, 180),
        lat_span_deg: finest.lat_span_deg,
        lon_span_deg: finest.lon_span_deg,
        precision: pair_count as u8,
    })
}

/// `units / per_deg - offset_deg`, rounded once.
fn units_to_deg(units: u32, per_deg: u32, offset_deg: u32) -> f64 {
    (f64::from(units) - f64::from(offset_deg * per_deg)) / f64::from(per_deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jfk_full_precision() {
        let c = decode_locator("FN30CP54SU86").unwrap();
        assert!((c.latitude_deg - 40.645_251_736_111).abs() < 1e-9, "{c}");
        assert!((c.longitude_deg - -73.785_121_527_778).abs() < 1e-9, "{c}");
    }

    #[test]
    fn centering_offsets_per_length() {
        let expected = [
            ("AA", 5.0, 10.0),
            ("AA00", 0.5, 1.0),
            ("AA00AA", 1.25 / 60.0, 2.5 / 60.0),
            ("AA00AA00", 1.25 / 600.0, 2.5 / 600.0),
            ("AA00AA00AA", 1.25 / 14_400.0, 2.5 / 14_400.0),
            ("AA00AA00AA00", 1.25 / 144_000.0, 2.5 / 144_000.0),
        ];
        for (grid, lat_off, lon_off) in expected {
            let c = decode_locator(grid).unwrap();
            assert!((c.latitude_deg - (-90.0 + lat_off)).abs() < 1e-12, "{grid}");
            assert!((c.longitude_deg - (-180.0 + lon_off)).abs() < 1e-12, "{grid}");
        }
    }

    #[test]
    fn field_corners() {
        let c = decode_locator("RR").unwrap();
        assert_eq!(c, Coordinate::new(85.0, 170.0));
        let cell = decode_locator_cell("JO01").unwrap();
        assert_eq!(cell.south_west(), Coordinate::new(51.0, 0.0));
        assert_eq!(cell.precision(), 2);
    }

    #[test]
    fn corners_are_exact_on_edges() {
        let cell = decode_locator_cell("JB00AD00AA00").unwrap();
        assert_eq!(cell.south_west(), Coordinate::new(-79.875, 0.0));
        let cell = decode_locator_cell("FN31").unwrap();
        assert_eq!(cell.south_west(), Coordinate::new(41.0, -74.0));
        let cell = decode_locator_cell("RR99XX99XX99").unwrap();
        assert!((cell.north_east().latitude_deg - 90.0).abs() < 1e-12);
    }

    #[test]
    fn case_and_whitespace_insensitive() {
        assert_eq!(
            decode_locator("  fn30cp\n").unwrap(),
            decode_locator("FN30CP").unwrap()
        );
    }

    #[test]
    fn rejects_bad_lengths() {
        let cases = [
            ("", 0),
            ("F", 1),
            ("FN3", 3),
            ("FN30CP54SU861", 13),
            ("FN30CP54SU8612", 14),
        ];
        for (grid, len) in cases {
            assert_eq!(
                decode_locator(grid),
                Err(LocatorError::InvalidLength(len)),
                "{grid:?}"
            );
        }
    }

    #[test]
    fn rejects_characters_outside_alphabet() {
        assert_eq!(
            decode_locator("SN"),
            Err(LocatorError::InvalidCharacter {
                position: 0,
                found: 'S'
            })
        );
        assert_eq!(
            decode_locator("FNA0"),
            Err(LocatorError::InvalidCharacter {
                position: 2,
                found: 'A'
            })
        );
        assert_eq!(
            decode_locator("FN30CZ"),
            Err(LocatorError::InvalidCharacter {
                position: 5,
                found: 'Z'
            })
        );
    }

    #[test]
    fn non_ascii_counts_as_one_character() {
        assert_eq!(
            decode_locator("FÑ"),
            Err(LocatorError::InvalidCharacter {
                position: 1,
                found: 'Ñ'
            })
        );
    }

    #[test]
    fn bytes_must_be_utf8() {
        assert_eq!(decode_locator_bytes(&[0x46, 0xff]), Err(LocatorError::NotUtf8));
        assert!(decode_locator_bytes(b"FN30").is_ok());
    }
}
