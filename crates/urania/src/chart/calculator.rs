//! Single-pass natal chart pipeline.
//!
//! Julian Day, then ascendant and equal houses, then body longitudes, then
//! aspects. Body longitudes are resolved in two phases: every rate-based body
//! first, then synthetic points from that completed set and the cusps, so the
//! catalog order does not matter for dependency resolution.

use super::data::{BodyPosition, ChartBody, ChartData, ChartMetadata};
use crate::aspects::AspectCalculator;
use crate::catalog::{CelestialBody, BASE_BODIES};
use crate::ephemeris::points::lilith;
use crate::ephemeris::{
    ascendant, build_equal_houses, parse_timezone_offset, to_julian_day, BodySource, HouseCusp,
    HouseSystem, NatalInput, PointContext, RateBody, SyntheticPoint, MIDHEAVEN_CUSP,
};
use crate::error::ChartError;
use crate::western::normalize_degrees;
use std::collections::HashMap;

/// Computes charts over a body catalog
pub struct ChartCalculator {
    catalog: Vec<CelestialBody>,
    aspects: AspectCalculator,
}

impl ChartCalculator {
    /// Calculator over the canonical 22-body catalog
    pub fn new() -> Self {
        Self::with_catalog(BASE_BODIES.to_vec())
    }

    pub fn with_catalog(catalog: Vec<CelestialBody>) -> Self {
        Self {
            catalog,
            aspects: AspectCalculator::new(),
        }
    }

    pub fn catalog(&self) -> &[CelestialBody] {
        &self.catalog
    }

    pub fn calculate(&self, input: &NatalInput) -> Result<ChartData, ChartError> {
        let julian_day = to_julian_day(&input.date, &input.time, &input.timezone)?;
        let timezone_offset_minutes = parse_timezone_offset(&input.timezone);

        if input.house_system != HouseSystem::Equal {
            log::warn!(
                "{} houses are not implemented; using equal houses",
                input.house_system
            );
        }

        let asc = ascendant(julian_day, input.longitude);
        let houses = build_equal_houses(asc);
        let sources: Vec<BodySource> = self.catalog.iter().map(BodySource::of).collect();
        let longitudes = resolve_longitudes(&sources, julian_day, &houses);

        let bodies: Vec<ChartBody> = self
            .catalog
            .iter()
            .zip(sources.iter().zip(longitudes))
            .map(|(body, (source, longitude))| ChartBody {
                body: *body,
                position: BodyPosition::from_longitude(longitude, &houses),
                retrograde: is_retrograde(*source, julian_day, longitude),
            })
            .collect();

        let aspects = self.aspects.compute_aspects(&bodies);

        log::debug!(
            "Chart for {:?}: jd={} asc={:.4} bodies={} aspects={}",
            input.name,
            julian_day,
            asc,
            bodies.len(),
            aspects.len()
        );

        Ok(ChartData {
            metadata: ChartMetadata {
                julian_day,
                timezone_offset_minutes,
                location: input.location(),
                house_system: HouseSystem::Equal,
            },
            bodies,
            houses,
            aspects,
        })
    }
}

impl Default for ChartCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Longitudes for every classified body, in order
fn resolve_longitudes(sources: &[BodySource], julian_day: f64, houses: &[HouseCusp]) -> Vec<f64> {
    // Phase 1: rate model
    let rate_longitudes: HashMap<&str, f64> = sources
        .iter()
        .filter_map(|source| match source {
            BodySource::RateBased(body) => Some((body.id(), body.longitude_at(julian_day))),
            BodySource::Synthetic(_) => None,
        })
        .collect();

    let lookup = |body: RateBody| {
        rate_longitudes
            .get(body.id())
            .copied()
            .unwrap_or_else(|| body.longitude_at(julian_day))
    };

    // Phase 2: synthetic points from the completed map and the cusps
    let context = PointContext {
        sun: lookup(RateBody::SUN),
        moon: lookup(RateBody::MOON),
        ascendant: houses[0].longitude,
        midheaven: houses[MIDHEAVEN_CUSP].longitude,
    };

    sources
        .iter()
        .map(|source| match *source {
            BodySource::RateBased(body) => lookup(body),
            BodySource::Synthetic(point) => context.longitude_of(point),
        })
        .collect()
}

/// Calculate a chart over the canonical catalog
pub fn calculate_chart(input: &NatalInput) -> Result<ChartData, ChartError> {
    ChartCalculator::new().calculate(input)
}

/// One-day finite-difference motion test.
///
/// True when the forward difference, taken modulo 360, exceeds half a circle.
pub fn apparent_retrograde(today: f64, yesterday: f64) -> bool {
    normalize_degrees(today - yesterday) > 180.0
}

/// Sun, Moon, Part of Fortune and Vertex are never retrograde. Lilith is
/// compared against its own position a day earlier.
fn is_retrograde(source: BodySource, julian_day: f64, longitude: f64) -> bool {
    let yesterday = match source {
        BodySource::RateBased(body) if body.id() == "sun" || body.id() == "moon" => {
            return false
        }
        BodySource::RateBased(body) => body.longitude_at(julian_day - 1.0),
        BodySource::Synthetic(SyntheticPoint::Lilith) => {
            lilith(RateBody::MOON.longitude_at(julian_day - 1.0))
        }
        BodySource::Synthetic(SyntheticPoint::PartOfFortune | SyntheticPoint::Vertex) => {
            return false
        }
    };
    apparent_retrograde(longitude, yesterday)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::default_natal_input;

    #[test]
    fn test_apparent_retrograde_threshold() {
        assert!(!apparent_retrograde(10.0, 9.0));
        assert!(apparent_retrograde(9.0, 10.0));
        assert!(!apparent_retrograde(0.5, 359.5));
        assert!(apparent_retrograde(359.5, 0.5));
        assert!(!apparent_retrograde(180.0, 0.0));
    }

    #[test]
    fn test_sun_and_moon_never_retrograde() {
        assert!(!is_retrograde(BodySource::for_id("sun"), 2451545.0, 0.0));
        assert!(!is_retrograde(BodySource::for_id("moon"), 2451545.0, 0.0));
    }

    #[test]
    fn test_fortune_and_vertex_never_retrograde() {
        assert!(!is_retrograde(BodySource::for_id("fortune"), 2451545.0, 0.0));
        assert!(!is_retrograde(BodySource::for_id("vertex"), 2451545.0, 0.0));
    }

    #[test]
    fn test_rate_body_retrograde_uses_previous_day() {
        let jd = 2451545.0;
        let BodySource::RateBased(mars) = BodySource::for_id("mars") else {
            unreachable!()
        };
        let today = mars.longitude_at(jd);
        assert!(!is_retrograde(BodySource::for_id("mars"), jd, today));
        // A longitude just behind yesterday's reads as backward motion
        let behind = normalize_degrees(mars.longitude_at(jd - 1.0) - 1.0);
        assert!(is_retrograde(BodySource::for_id("mars"), jd, behind));
    }

    #[test]
    fn test_lilith_is_eligible_for_retrograde() {
        let jd = 2451545.0;
        let yesterday = lilith(RateBody::MOON.longitude_at(jd - 1.0));
        let source = BodySource::for_id("lilith");
        assert!(!is_retrograde(source, jd, lilith(RateBody::MOON.longitude_at(jd))));
        assert!(is_retrograde(source, jd, normalize_degrees(yesterday - 2.0)));
    }

    #[test]
    fn test_resolution_does_not_depend_on_catalog_order() {
        let input = default_natal_input();
        let mut reversed = BASE_BODIES.to_vec();
        reversed.reverse();

        let forward = ChartCalculator::new().calculate(&input).unwrap();
        let backward = ChartCalculator::with_catalog(reversed).calculate(&input).unwrap();

        for body in &forward.bodies {
            let other = backward.body(body.body.id).unwrap();
            assert_eq!(body.position, other.position);
        }
    }
}
