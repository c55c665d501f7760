//! Mean-motion orbital model and body classification.
//!
//! Rate-based bodies move linearly: `base + rate * (jd - J2000)`. Synthetic
//! points are derived from other longitudes and cusps and never reach the
//! rate model.

use super::time::J2000;
use crate::catalog::CelestialBody;
use crate::error::ChartError;
use crate::western::normalize_degrees;

/// Longitude at J2000 and mean daily motion, both in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalRate {
    pub base: f64,
    pub rate: f64,
}

impl OrbitalRate {
    pub fn longitude_at(&self, julian_day: f64) -> f64 {
        let days = julian_day - J2000;
        normalize_degrees(self.base + self.rate * days)
    }
}

const fn orbit(base: f64, rate: f64) -> OrbitalRate {
    OrbitalRate { base, rate }
}

const SUN_ORBIT: OrbitalRate = orbit(280.46, 0.98564736);
const MOON_ORBIT: OrbitalRate = orbit(218.316, 13.176358);

const ORBITAL_RATES: &[(&str, OrbitalRate)] = &[
    ("sun", SUN_ORBIT),
    ("moon", MOON_ORBIT),
    ("mercury", orbit(60.750, 4.092356)),
    ("venus", orbit(88.307, 1.602130)),
    ("mars", orbit(181.9798, 0.52402068)),
    ("jupiter", orbit(34.404, 0.08308529)),
    ("saturn", orbit(50.077, 0.03344414)),
    ("uranus", orbit(314.055, 0.01168998)),
    ("neptune", orbit(304.348, 0.00598103)),
    ("pluto", orbit(238.929, 0.003964015)),
    ("ceres", orbit(130.743, 0.2141)),
    ("pallas", orbit(56.4, 0.2603)),
    ("juno", orbit(245.642, 0.2801)),
    ("vesta", orbit(119.182, 0.3234)),
    ("chiron", orbit(209.5, 0.0172)),
    ("pholus", orbit(150.3, 0.0415)),
    ("fama", orbit(93.1, 0.2379)),
    ("aura", orbit(12.7, 0.1843)),
    ("rockefellia", orbit(333.6, 0.1987)),
];

/// Slow-mover default for bodies without a table entry
pub const FALLBACK_ORBIT: OrbitalRate = orbit(34.404, 0.08308529);

/// Look up the rate entry for a body id
pub fn orbital_rate(body_id: &str) -> Result<OrbitalRate, ChartError> {
    ORBITAL_RATES
        .iter()
        .find(|(id, _)| *id == body_id)
        .map(|(_, rate)| *rate)
        .ok_or_else(|| ChartError::MissingCatalogEntry {
            body_id: body_id.to_string(),
        })
}

/// Rate entry for a body id, falling back to Jupiter's motion
pub fn orbital_rate_or_fallback(body_id: &str) -> OrbitalRate {
    orbital_rate(body_id).unwrap_or_else(|e| {
        log::warn!("{}; using the Jupiter rate", e);
        FALLBACK_ORBIT
    })
}

/// Points derived from other chart positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntheticPoint {
    /// Mean lunar apogee: Moon + 180°
    Lilith,
    /// Ascendant + Moon - Sun
    PartOfFortune,
    /// Midheaven + 90°
    Vertex,
}

impl SyntheticPoint {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "lilith" => Some(SyntheticPoint::Lilith),
            "fortune" => Some(SyntheticPoint::PartOfFortune),
            "vertex" => Some(SyntheticPoint::Vertex),
            _ => None,
        }
    }
}

/// A body whose longitude comes from the rate table.
///
/// Only built through [`BodySource::of`], so a synthetic point id never ends
/// up here. The rate is looked up once, when the body is classified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateBody<'a> {
    id: &'a str,
    orbit: OrbitalRate,
}

impl RateBody<'static> {
    pub const SUN: Self = RateBody {
        id: "sun",
        orbit: SUN_ORBIT,
    };
    pub const MOON: Self = RateBody {
        id: "moon",
        orbit: MOON_ORBIT,
    };
}

impl<'a> RateBody<'a> {
    pub fn id(&self) -> &'a str {
        self.id
    }

    pub fn orbit(&self) -> OrbitalRate {
        self.orbit
    }

    pub fn longitude_at(&self, julian_day: f64) -> f64 {
        self.orbit().longitude_at(julian_day)
    }
}

/// How a catalog body's longitude is obtained
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodySource<'a> {
    RateBased(RateBody<'a>),
    Synthetic(SyntheticPoint),
}

impl<'a> BodySource<'a> {
    pub fn of(body: &'a CelestialBody) -> Self {
        Self::for_id(body.id)
    }

    pub fn for_id(id: &'a str) -> Self {
        match SyntheticPoint::from_id(id) {
            Some(point) => BodySource::Synthetic(point),
            None => BodySource::RateBased(RateBody {
                id,
                orbit: orbital_rate_or_fallback(id),
            }),
        }
    }
}
