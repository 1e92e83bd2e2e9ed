//! Coordinate to locator.

use qth_math::{Coordinate, normalize_180};

use crate::error::LocatorError;
use crate::table::{MAX_PRECISION, MIN_PRECISION, PAIRS};

/// Encode `coord` as a Maidenhead locator of `precision` pairs
/// (`2 * precision` characters, upper case).
///
/// Longitude is first wrapped into [-180, 180). Latitude must lie in
/// [-90, 90]; the north pole is placed in the topmost row of cells.
///
/// The field is split off in degrees with an exact remainder. The rest is
/// carried in units of the current pair's cell: each pair emits the whole
/// part and scales the fraction by the next radix (×24, ×10, …), longitude
/// first. Coordinates on a cell edge land in the cell that starts there.
pub fn encode_locator(coord: Coordinate, precision: u8) -> Result<String, LocatorError> {
    if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
        return Err(LocatorError::InvalidPrecision(precision));
    }
    coord.validate()?;

    let pairs = &PAIRS[..usize::from(precision)];
    let field = &pairs[0];

    let lon_deg = normalize_180(coord.longitude_deg) + 180.0;
    let lat_deg = coord.latitude_deg + 90.0;
    let (lon_value, lon_rem) = split_degrees(lon_deg, field.lon_span_deg, field.radix);
    let (lat_value, lat_rem) = split_degrees(lat_deg, field.lat_span_deg, field.radix);

    let mut locator = String::with_capacity(2 * pairs.len());
    locator.push(field.symbol(lon_value));
    locator.push(field.symbol(lat_value));

    let Some(square) = pairs.get(1) else {
        return Ok(locator);
    };
    // Square spans are 2° and 1°, so these divisions are exact.
    let mut x = lon_rem / square.lon_span_deg;
    let mut y = lat_rem / square.lat_span_deg;

    for (i, pair) in pairs.iter().enumerate().skip(1) {
        if i > 1 {
            let radix = f64::from(pair.radix);
            x *= radix;
            y *= radix;
        }
        let lon_value = take_whole(&mut x, pair.radix);
        let lat_value = take_whole(&mut y, pair.radix);
        locator.push(pair.symbol(lon_value));
        locator.push(pair.symbol(lat_value));
    }

    Ok(locator)
}

/// Split a non-negative angle into its field index (capped at
/// `radix - 1`) and the remainder in degrees inside that field.
fn split_degrees(deg: f64, span: f64, radix: u8) -> (u8, f64) {
    let rem = deg % span;
    let whole = ((deg - rem) / span).round() as u8;
    if whole < radix {
        (whole, rem)
    } else {
        let last = radix - 1;
        (last, deg - f64::from(last) * span)
    }
}

/// Split `scaled` into its integer part (returned, capped at `radix - 1`)
/// and the fraction left behind in `scaled`.
fn take_whole(scaled: &mut f64, radix: u8) -> u8 {
    let whole = (scaled.floor() as u8).min(radix - 1);
    *scaled -= f64::from(whole);
    whole
}
