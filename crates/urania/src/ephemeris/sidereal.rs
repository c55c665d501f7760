//! Local sidereal time, used directly as the ascendant.

use super::time::J2000;
use crate::western::normalize_degrees;

/// Julian centuries since J2000.0
pub fn julian_centuries(julian_day: f64) -> f64 {
    (julian_day - J2000) / 36525.0
}

/// Greenwich mean sidereal time in degrees, not normalized
pub fn greenwich_sidereal_degrees(julian_day: f64) -> f64 {
    let t = julian_centuries(julian_day);
    280.46061837 + 360.98564736629 * (julian_day - J2000) + 0.000387933 * t * t
        - (t * t * t) / 38710000.0
}

/// Local sidereal time in degrees for an east-positive longitude, in [0, 360)
pub fn local_sidereal_degrees(julian_day: f64, longitude: f64) -> f64 {
    normalize_degrees(greenwich_sidereal_degrees(julian_day) + longitude)
}

/// Ascendant degree.
///
/// Taken straight from local sidereal time with no obliquity or latitude
/// correction.
pub fn ascendant(julian_day: f64, longitude: f64) -> f64 {
    local_sidereal_degrees(julian_day, longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidereal_at_j2000() {
        assert_eq!(julian_centuries(J2000), 0.0);
        assert!((local_sidereal_degrees(J2000, 0.0) - 280.46061837).abs() < 1e-9);
    }

    #[test]
    fn test_longitude_shifts_sidereal_time() {
        let jd = 2448058.09375;
        let greenwich = local_sidereal_degrees(jd, 0.0);
        let east = local_sidereal_degrees(jd, 15.0);
        assert!((normalize_degrees(east - greenwich) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_ascendant_fixture() {
        let asc = ascendant(2448058.09375, -58.3816);
        assert!((asc - 58.96906009293161).abs() < 1e-9);
    }
}
