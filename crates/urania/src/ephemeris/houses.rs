//! Equal house cusps and house assignment.

use crate::western::{normalize_degrees, DegreeParts, ZodiacSign};
use serde::Serialize;

pub const HOUSE_COUNT: usize = 12;
/// Index of the midheaven cusp within the cusp list (house 10)
pub const MIDHEAVEN_CUSP: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseCusp {
    /// 1-12
    pub index: u8,
    pub longitude: f64,
    pub sign: ZodiacSign,
    pub sign_degree: u32,
    pub minutes: u32,
}

/// Twelve cusps 30° apart, cusp 1 at the ascendant
pub fn build_equal_houses(ascendant: f64) -> Vec<HouseCusp> {
    (0..HOUSE_COUNT)
        .map(|i| {
            let longitude = normalize_degrees(ascendant + i as f64 * 30.0);
            let parts = DegreeParts::from_longitude(longitude);
            HouseCusp {
                index: i as u8 + 1,
                longitude,
                sign: parts.sign,
                sign_degree: parts.sign_degree,
                minutes: parts.minutes,
            }
        })
        .collect()
}

/// House containing a longitude.
///
/// Intervals are closed at their starting cusp and open at the next one, and
/// wrap through 0°. Falls back to house 12 if no interval matches.
pub fn assign_house(longitude: f64, cusps: &[HouseCusp]) -> u8 {
    let value = normalize_degrees(longitude);
    for (i, cusp) in cusps.iter().enumerate() {
        let start = cusp.longitude;
        let end = cusps[(i + 1) % cusps.len()].longitude;
        let inside = if start <= end {
            value >= start && value < end
        } else {
            value >= start || value < end
        };
        if inside {
            return cusp.index;
        }
    }
    12
}
