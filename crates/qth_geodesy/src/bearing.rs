//! Initial great-circle bearing.

use qth_math::{Coordinate, deg_to_rad, normalize_360, rad_to_deg};

/// Initial bearing in degrees from `from` toward `to`, clockwise from true
/// north, in [0, 360).
///
/// Uses the spherical formula
/// `atan2(sin Δλ · cos φ2, cos φ1 · sin φ2 − sin φ1 · cos φ2 · cos Δλ)`.
///
/// The bearing between coincident points is undefined. Here both atan2
/// arguments are exactly +0.0, and IEEE-754 `atan2(+0, +0)` is +0, so the
/// function returns 0.0. Bearings *from* a pole are degenerate in the same
/// way: every direction is south (or north), and the value returned follows
/// from the longitude difference alone.
///
/// Like the haversine distance, inputs are not validated.
pub fn initial_bearing_deg(from: Coordinate, to: Coordinate) -> f64 {
    let phi1 = from.latitude_rad();
    let phi2 = to.latitude_rad();
    let dlon = deg_to_rad(to.longitude_deg - from.longitude_deg);

    let y = dlon.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlon.cos();

    normalize_360(rad_to_deg(y.atan2(x)))
}
