//! Earth models: a sphere for the haversine formula and reference
//! ellipsoids for the Vincenty solver.

use crate::error::GeodesyError;

/// Spherical Earth model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Radius in kilometres.
    pub radius_km: f64,
}

impl Sphere {
    /// Mean Earth radius, 6371.0 km.
    pub const MEAN_EARTH: Self = Self { radius_km: 6371.0 };

    pub const fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }

    pub fn validate(&self) -> Result<(), GeodesyError> {
        if !self.radius_km.is_finite() || self.radius_km <= 0.0 {
            return Err(GeodesyError::InvalidModel(
                "sphere radius must be finite and positive",
            ));
        }
        Ok(())
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::MEAN_EARTH
    }
}

/// Oblate reference ellipsoid defined by semi-major axis and flattening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    name: &'static str,
    /// Semi-major (equatorial) axis in metres.
    pub semi_major_m: f64,
    /// Flattening `f = (a - b) / a`.
    pub flattening: f64,
}

const PREDEFINED: [Ellipsoid; 2] = [Ellipsoid::WGS84, Ellipsoid::GRS80];

impl Ellipsoid {
    /// World Geodetic System 1984.
    pub const WGS84: Self = Self {
        name: "WGS84",
        semi_major_m: 6_378_137.0,
        flattening: 1.0 / 298.257_223_563,
    };

    /// Geodetic Reference System 1980.
    pub const GRS80: Self = Self {
        name: "GRS80",
        semi_major_m: 6_378_137.0,
        flattening: 1.0 / 298.257_222_100_882_7,
    };

    /// User-defined ellipsoid.
    pub const fn new(semi_major_m: f64, flattening: f64) -> Self {
        Self {
            name: "custom",
            semi_major_m,
            flattening,
        }
    }

    /// Look up a predefined ellipsoid by name (case-insensitive).
    pub fn named(name: &str) -> Option<Self> {
        PREDEFINED
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .copied()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Semi-minor (polar) axis `b = (1 - f) * a` in metres.
    pub fn semi_minor_m(&self) -> f64 {
        (1.0 - self.flattening) * self.semi_major_m
    }

    pub fn validate(&self) -> Result<(), GeodesyError> {
        if !self.semi_major_m.is_finite() || self.semi_major_m <= 0.0 {
            return Err(GeodesyError::InvalidModel(
                "semi-major axis must be finite and positive",
            ));
        }
        if !(0.0..1.0).contains(&self.flattening) {
            return Err(GeodesyError::InvalidModel("flattening must be in [0, 1)"));
        }
        Ok(())
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wgs84_semi_minor_axis() {
        let b = Ellipsoid::WGS84.semi_minor_m();
        assert!((b - 6_356_752.314_245).abs() < 1e-3, "b = {b}");
    }

    #[test]
    fn named_lookup() {
        assert_eq!(Ellipsoid::named("wgs84"), Some(Ellipsoid::WGS84));
        assert_eq!(Ellipsoid::named("GRS80"), Some(Ellipsoid::GRS80));
        assert_eq!(Ellipsoid::named("clarke1866"), None);
    }

    #[test]
    fn validate_rejects_bad_parameters() {
        assert!(Ellipsoid::WGS84.validate().is_ok());
        assert!(Ellipsoid::new(-1.0, 0.003).validate().is_err());
        assert!(Ellipsoid::new(6_378_137.0, 1.0).validate().is_err());
        assert!(Sphere::new(0.0).validate().is_err());
        assert!(Sphere::default().validate().is_ok());
    }

    #[test]
    fn defaults() {
        assert_eq!(Sphere::default().radius_km, 6371.0);
        assert_eq!(Ellipsoid::default(), Ellipsoid::WGS84);
    }
}
