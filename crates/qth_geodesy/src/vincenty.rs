//! Vincenty inverse solution: distance between two points on an ellipsoid.
//!
//! The longitude on the auxiliary sphere (λ) is refined by fixed-point
//! iteration until successive values differ by at most
//! [`CONVERGENCE_TOLERANCE`] radians. The classic formulation converges
//! slowly or not at all for nearly antipodal points; when
//! [`MAX_ITERATIONS`] is exhausted the result is
//! [`GeodesyError::NoConvergence`]. This behaviour is kept as-is: changing
//! either constant changes which edge-case inputs converge.
//!
//! Reference: T. Vincenty, "Direct and inverse solutions of geodesics on the
//! ellipsoid with application of nested equations", Survey Review, 1975.

use qth_math::Coordinate;
use tracing::{debug, trace};

use crate::error::GeodesyError;
use crate::model::Ellipsoid;

/// λ convergence threshold in radians.
pub const CONVERGENCE_TOLERANCE: f64 = 1e-12;

/// Iteration budget for the λ refinement.
pub const MAX_ITERATIONS: u32 = 100;

/// Converged inverse solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VincentySolution {
    /// Ellipsoidal distance in metres.
    pub distance_m: f64,
    /// Angular separation on the auxiliary sphere in radians.
    pub sigma_rad: f64,
    /// Number of λ iterations performed (0 never occurs; coincident points
    /// report the iteration that detected them).
    pub iterations: u32,
}

impl VincentySolution {
    /// Distance in kilometres.
    pub fn distance_km(&self) -> f64 {
        self.distance_m / 1000.0
    }
}

/// Ellipsoidal distance in kilometres on WGS-84.
///
/// Returns [`GeodesyError::NoConvergence`] for nearly antipodal points;
/// callers must handle that case rather than substitute a number.
pub fn ellipsoidal_distance_km(from: Coordinate, to: Coordinate) -> Result<f64, GeodesyError> {
    ellipsoidal_distance_km_on(&Ellipsoid::WGS84, from, to)
}

/// Ellipsoidal distance in kilometres on the given ellipsoid.
pub fn ellipsoidal_distance_km_on(
    ellipsoid: &Ellipsoid,
    from: Coordinate,
    to: Coordinate,
) -> Result<f64, GeodesyError> {
    vincenty_inverse(ellipsoid, from, to).map(|s| s.distance_km())
}

/// Solve the inverse geodesic problem on `ellipsoid`.
pub fn vincenty_inverse(
    ellipsoid: &Ellipsoid,
    from: Coordinate,
    to: Coordinate,
) -> Result<VincentySolution, GeodesyError> {
    ellipsoid.validate()?;
    from.validate()?;
    to.validate()?;

    let a = ellipsoid.semi_major_m;
    let f = ellipsoid.flattening;
    let b = ellipsoid.semi_minor_m();

    // Reduced latitudes on the auxiliary sphere.
    let u1 = ((1.0 - f) * from.latitude_rad().tan()).atan();
    let u2 = ((1.0 - f) * to.latitude_rad().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let l = qth_math::deg_to_rad(to.longitude_deg - from.longitude_deg);
    let mut lambda = l;

    let mut iterations = 0;
    let (sin_sigma, cos_sigma, sigma, cos_sq_alpha, cos_2sigma_m) = loop {
        iterations += 1;

        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let cross = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
        let sin_sigma = ((cos_u2 * sin_lambda) * (cos_u2 * sin_lambda) + cross * cross).sqrt();
        if sin_sigma == 0.0 {
            // Coincident points.
            return Ok(VincentySolution {
                distance_m: 0.0,
                sigma_rad: 0.0,
                iterations,
            });
        }
        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // Both points on the equator: cos²α = 0 and the mid-point term vanishes.
        let cos_2sigma_m = if cos_sq_alpha != 0.0 {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        } else {
            0.0
        };
        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));

        let lambda_prev = lambda;
        lambda = l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m
                            + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        if (lambda - lambda_prev).abs() <= CONVERGENCE_TOLERANCE {
            break (sin_sigma, cos_sigma, sigma, cos_sq_alpha, cos_2sigma_m);
        }
        if iterations >= MAX_ITERATIONS {
            debug!(
                from = %from,
                to = %to,
                iterations,
                "vincenty inverse did not converge"
            );
            return Err(GeodesyError::NoConvergence { iterations });
        }
    };

    let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let delta_sigma = big_b
        * sin_sigma
        * (cos_2sigma_m
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                    - big_b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

    let distance_m = b * big_a * (sigma - delta_sigma);
    trace!(iterations, distance_m, "vincenty inverse converged");

    Ok(VincentySolution {
        distance_m,
        sigma_rad: sigma,
        iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coincident_points_short_circuit() {
        let p = Coordinate::new(10.0, 20.0);
        let s = vincenty_inverse(&Ellipsoid::WGS84, p, p).unwrap();
        assert_eq!(s.distance_m, 0.0);
        assert_eq!(s.iterations, 1);
    }

    #[test]
    fn equatorial_degree() {
        // One degree along the equator is a along the ellipse: a * pi / 180.
        let d = ellipsoidal_distance_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0))
            .unwrap();
        assert!((d - 111.319_490_793).abs() < 1e-6, "d = {d}");
    }

    #[test]
    fn meridian_degree_near_equator() {
        let d = ellipsoidal_distance_km(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0))
            .unwrap();
        assert!((d - 110.574_388_558).abs() < 1e-6, "d = {d}");
    }

    #[test]
    fn antipodal_equator_does_not_converge() {
        let err = ellipsoidal_distance_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0))
            .unwrap_err();
        assert_eq!(
            err,
            GeodesyError::NoConvergence {
                iterations: MAX_ITERATIONS
            }
        );
    }

    #[test]
    fn rejects_invalid_ellipsoid() {
        let bad = Ellipsoid::new(6_378_137.0, -0.1);
        let err = vincenty_inverse(&bad, Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0))
            .unwrap_err();
        assert!(matches!(err, GeodesyError::InvalidModel(_)));
    }

    #[test]
    fn rejects_invalid_coordinates() {
        let origin = Coordinate::new(0.0, 0.0);
        for bad in [
            Coordinate::new(f64::NAN, 0.0),
            Coordinate::new(0.0, f64::INFINITY),
            Coordinate::new(100.0, 0.0),
        ] {
            let err = ellipsoidal_distance_km(bad, origin).unwrap_err();
            assert!(matches!(err, GeodesyError::InvalidCoordinate(_)), "{err}");
            assert_eq!(err.kind(), qth_math::ErrorKind::InvalidArgument);
            assert!(ellipsoidal_distance_km(origin, bad).is_err());
        }
    }

    #[test]
    fn converged_solution_reports_iterations() {
        let s = vincenty_inverse(
            &Ellipsoid::WGS84,
            Coordinate::new(40.7128, -74.006),
            Coordinate::new(51.5074, -0.1278),
        )
        .unwrap();
        assert!(s.iterations > 1 && s.iterations < MAX_ITERATIONS);
        assert!(s.sigma_rad > 0.0);
    }
}
