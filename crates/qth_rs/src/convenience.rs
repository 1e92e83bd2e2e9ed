use qth_geodesy as geodesy;
use qth_grid as grid;
use qth_math::Coordinate;

use crate::error::QthError;

/// Haversine distance in km on the 6371 km mean-radius sphere.
///
/// Inputs are not validated; NaN in gives NaN out.
pub fn haversine_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    geodesy::haversine_distance_km(Coordinate::new(lat1, lon1), Coordinate::new(lat2, lon2))
}

/// Vincenty distance in km on WGS-84.
///
/// Non-finite values and latitudes outside [-90, 90] are rejected as
/// invalid arguments. Nearly antipodal points yield [`QthError::Geodesy`] with
/// [`qth_geodesy::GeodesyError::NoConvergence`].
pub fn ellipsoidal_distance_km(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
) -> Result<f64, QthError> {
    Ok(geodesy::ellipsoidal_distance_km(
        Coordinate::new(lat1, lon1),
        Coordinate::new(lat2, lon2),
    )?)
}

/// Initial great-circle bearing in degrees, [0, 360).
///
/// Coincident points return 0.0. Inputs are not validated.
pub fn initial_bearing_deg(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    geodesy::initial_bearing_deg(Coordinate::new(lat1, lon1), Coordinate::new(lat2, lon2))
}

/// Maidenhead locator of `2 * precision` characters (precision 1..=6).
pub fn encode_locator(lat: f64, lon: f64, precision: u8) -> Result<String, QthError> {
    Ok(grid::encode_locator(Coordinate::new(lat, lon), precision)?)
}

/// Center of the locator's cell as `(latitude, longitude)`.
pub fn decode_locator(locator: &str) -> Result<(f64, f64), QthError> {
    let center = grid::decode_locator(locator)?;
    Ok((center.latitude_deg, center.longitude_deg))
}
