//! Synthetic chart points.

use super::orbits::SyntheticPoint;
use crate::western::normalize_degrees;

/// Mean lunar apogee
pub fn lilith(moon: f64) -> f64 {
    normalize_degrees(moon + 180.0)
}

pub fn part_of_fortune(ascendant: f64, moon: f64, sun: f64) -> f64 {
    normalize_degrees(ascendant + moon - sun)
}

pub fn vertex(midheaven: f64) -> f64 {
    normalize_degrees(midheaven + 90.0)
}

/// Already-resolved longitudes that synthetic points are derived from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointContext {
    pub sun: f64,
    pub moon: f64,
    pub ascendant: f64,
    /// Cusp of house 10
    pub midheaven: f64,
}

impl PointContext {
    pub fn longitude_of(&self, point: SyntheticPoint) -> f64 {
        match point {
            SyntheticPoint::Lilith => lilith(self.moon),
            SyntheticPoint::PartOfFortune => part_of_fortune(self.ascendant, self.moon, self.sun),
            SyntheticPoint::Vertex => vertex(self.midheaven),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_points() {
        let ctx = PointContext {
            sun: 100.0,
            moon: 250.0,
            ascendant: 300.0,
            midheaven: 210.0,
        };
        assert_eq!(ctx.longitude_of(SyntheticPoint::Lilith), 70.0);
        assert_eq!(ctx.longitude_of(SyntheticPoint::PartOfFortune), 90.0);
        assert_eq!(ctx.longitude_of(SyntheticPoint::Vertex), 300.0);
    }

    #[test]
    fn test_part_of_fortune_wraps_negative() {
        assert_eq!(part_of_fortune(10.0, 20.0, 50.0), 340.0);
    }
}
