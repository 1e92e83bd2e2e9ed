//! Great-circle distance on a spherical Earth (haversine formula).

use qth_math::Coordinate;

use crate::model::Sphere;

/// Great-circle distance in kilometres on the mean-radius sphere (6371 km).
///
/// Symmetric in its arguments and zero for coincident points. The
/// spherical model is off by up to about 0.5 % against the ellipsoid.
///
/// Inputs are not validated: a NaN component yields NaN and latitudes
/// outside [-90, 90] give a meaningless value. Build points with
/// [`Coordinate::try_new`] when they come from untrusted input.
pub fn haversine_distance_km(from: Coordinate, to: Coordinate) -> f64 {
    haversine_distance_km_on(&Sphere::MEAN_EARTH, from, to)
}

/// Great-circle distance in kilometres on a sphere of the given radius.
pub fn haversine_distance_km_on(sphere: &Sphere, from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude_rad();
    let lat2 = to.latitude_rad();
    let dlat = lat2 - lat1;
    let dlon = to.longitude_rad() - from.longitude_rad();

    let sin_half_dlat = (dlat / 2.0).sin();
    let sin_half_dlon = (dlon / 2.0).sin();
    let a = sin_half_dlat * sin_half_dlat
        + lat1.cos() * lat2.cos() * sin_half_dlon * sin_half_dlon;
    // Rounding can push `a` a hair past 1 for antipodal points.
    let a = a.min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    sphere.radius_km * c
}
