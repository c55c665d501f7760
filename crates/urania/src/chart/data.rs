use crate::aspects::Aspect;
use crate::catalog::CelestialBody;
use crate::ephemeris::{assign_house, GeoLocation, HouseCusp, HouseSystem};
use crate::western::{
    degree_within_sign, dodecatemoria, sign_from_longitude, DegreeParts, ZodiacSign,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyPosition {
    /// Ecliptic longitude, 0-360
    pub longitude: f64,
    /// Always 0; the model has no ecliptic latitude
    pub latitude: f64,
    pub sign: ZodiacSign,
    pub sign_degree: u32,
    pub minutes: u32,
    pub dodecatemoria: ZodiacSign,
    /// 1-12
    pub house: u8,
}

impl BodyPosition {
    /// Classify a longitude against the chart's house cusps
    pub fn from_longitude(longitude: f64, cusps: &[HouseCusp]) -> Self {
        let parts = DegreeParts::from_longitude(longitude);
        let dodecatemoria = dodecatemoria(
            sign_from_longitude(longitude),
            degree_within_sign(longitude),
        );
        Self {
            longitude,
            latitude: 0.0,
            sign: parts.sign,
            sign_degree: parts.sign_degree,
            minutes: parts.minutes,
            dodecatemoria,
            house: assign_house(longitude, cusps),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartBody {
    #[serde(flatten)]
    pub body: CelestialBody,
    pub position: BodyPosition,
    pub retrograde: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMetadata {
    pub julian_day: f64,
    pub timezone_offset_minutes: i32,
    pub location: GeoLocation,
    /// House system the cusps were built with
    pub house_system: HouseSystem,
}

/// Result of one chart calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub metadata: ChartMetadata,
    pub bodies: Vec<ChartBody>,
    pub houses: Vec<HouseCusp>,
    pub aspects: Vec<Aspect>,
}

impl ChartData {
    pub fn body(&self, id: &str) -> Option<&ChartBody> {
        self.bodies.iter().find(|b| b.body.id == id)
    }

    pub fn ascendant(&self) -> f64 {
        self.houses.first().map(|cusp| cusp.longitude).unwrap_or(0.0)
    }

    /// Aspects that involve the given body
    pub fn aspects_for<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Aspect> + 'a {
        self.aspects
            .iter()
            .filter(move |a| a.from.object_id == id || a.to.object_id == id)
    }
}
