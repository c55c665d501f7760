//! Fixed catalog of chart bodies.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CelestialCategory {
    Planet,
    Asteroid,
    Centaur,
    Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CelestialBody {
    pub id: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub category: CelestialCategory,
    /// Display only
    pub color: &'static str,
}

const fn body(
    id: &'static str,
    name: &'static str,
    symbol: &'static str,
    category: CelestialCategory,
    color: &'static str,
) -> CelestialBody {
    CelestialBody {
        id,
        name,
        symbol,
        category,
        color,
    }
}

use CelestialCategory::{Asteroid, Centaur, Planet, Point};

/// Canonical catalog order. Aspect ids and enumeration follow this order.
pub const BASE_BODIES: [CelestialBody; 22] = [
    body("sun", "Sun", "☉", Planet, "#ffd369"),
    body("moon", "Moon", "☽", Planet, "#f8f5ff"),
    body("mercury", "Mercury", "☿", Planet, "#cfd2f5"),
    body("venus", "Venus", "♀", Planet, "#f5b6d4"),
    body("mars", "Mars", "♂", Planet, "#ff6b6b"),
    body("jupiter", "Jupiter", "♃", Planet, "#f5d08a"),
    body("saturn", "Saturn", "♄", Planet, "#b4b2d0"),
    body("uranus", "Uranus", "♅", Planet, "#87ebff"),
    body("neptune", "Neptune", "♆", Planet, "#6fc0ff"),
    body("pluto", "Pluto", "♇", Planet, "#c185ff"),
    body("ceres", "Ceres", "⚳", Asteroid, "#b3f6c3"),
    body("pallas", "Pallas", "⚴", Asteroid, "#f9dc5c"),
    body("juno", "Juno", "⚵", Asteroid, "#ffa69e"),
    body("vesta", "Vesta", "⚶", Asteroid, "#ffd3b6"),
    body("chiron", "Chiron", "⚷", Centaur, "#8ac6d0"),
    body("pholus", "Pholus", "Ph", Centaur, "#94b3fd"),
    body("lilith", "Lilith", "⚸", Point, "#d8b4f8"),
    body("fortune", "Part of Fortune", "⊗", Point, "#b8ffd9"),
    body("vertex", "Vertex", "Vx", Point, "#f472b6"),
    body("fama", "Fama (408)", "Fa", Asteroid, "#ffd700"),
    body("aura", "Aura (1488)", "Au", Asteroid, "#d0e2ff"),
    body("rockefellia", "Rockefellia (904)", "Rf", Asteroid, "#a7f3d0"),
];

/// Look up a catalog body by id
pub fn find_body(id: &str) -> Option<&'static CelestialBody> {
    BASE_BODIES.iter().find(|b| b.id == id)
}
