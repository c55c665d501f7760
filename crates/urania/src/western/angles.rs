//! Angular arithmetic on the ecliptic circle.

/// Reduce an angle into [0, 360)
pub fn normalize_degrees(value: f64) -> f64 {
    let normalized = value.rem_euclid(360.0);
    // A tiny negative input rounds up to exactly 360.0
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Shortest angular separation between two longitudes, in [0, 180]
pub fn angle_difference(a: f64, b: f64) -> f64 {
    let diff = (normalize_degrees(a) - normalize_degrees(b)).abs();
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}
