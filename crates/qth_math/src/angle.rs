//! Degree/radian conversion and angle normalization.

use std::f64::consts::PI;
use std::fmt::{Display, Formatter};

const RAD_PER_DEG: f64 = PI / 180.0;
const DEG_PER_RAD: f64 = 180.0 / PI;

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * RAD_PER_DEG
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * DEG_PER_RAD
}

/// Normalize an angle to [0, 360) degrees.
///
/// Negative remainders are shifted up by one turn. A remainder so small that
/// the shift rounds to exactly 360.0 maps to 0.0, so the upper bound is
/// never reached.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to [-180, 180) degrees.
pub fn normalize_180(deg: f64) -> f64 {
    normalize_360(deg + 180.0) - 180.0
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// True when the source angle was negative (south / west).
    pub negative: bool,
    /// Whole degrees.
    pub degrees: u16,
    /// Arc-minutes (0..60).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(
            f,
            "{sign}{}° {:02}' {:05.2}\"",
            self.degrees, self.minutes, self.seconds
        )
    }
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// The sign is kept in [`Dms::negative`]; the components are magnitudes.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let remainder = (d - degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        negative: deg < 0.0,
        degrees,
        minutes,
        seconds,
    }
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    let magnitude = dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0;
    if dms.negative { -magnitude } else { magnitude }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deg_rad_roundtrip() {
        for deg in [-720.0, -180.0, -45.5, 0.0, 1.0, 90.0, 359.999] {
            assert!((rad_to_deg(deg_to_rad(deg)) - deg).abs() < 1e-12);
        }
    }

    #[test]
    fn deg_to_rad_matches_std() {
        assert_eq!(deg_to_rad(51.5074), 51.5074_f64.to_radians());
        assert!((deg_to_rad(180.0) - PI).abs() < 1e-15);
    }

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        let r = normalize_360(-1e-20);
        assert!((0.0..360.0).contains(&r), "got {r}");
    }

    #[test]
    fn normalize_180_range() {
        assert_eq!(normalize_180(180.0), -180.0);
        assert!((normalize_180(190.0) - -170.0).abs() < 1e-12);
        assert!((normalize_180(-190.0) - 170.0).abs() < 1e-12);
        assert!((normalize_180(-73.785112) - -73.785112).abs() < 1e-12);
    }

    #[test]
    fn dms_roundtrip() {
        let dms = deg_to_dms(-74.006);
        assert!(dms.negative);
        assert_eq!(dms.degrees, 74);
        assert_eq!(dms.minutes, 0);
        assert!((dms.seconds - 21.6).abs() < 1e-6);
        assert!((dms_to_deg(&dms) - -74.006).abs() < 1e-12);
    }

    #[test]
    fn dms_display() {
        let dms = deg_to_dms(40.5);
        assert_eq!(dms.to_string(), "40° 30' 00.00\"");
    }
}
