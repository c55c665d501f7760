use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
    Quincunx,
}

impl AspectKind {
    pub fn name(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Opposition => "Opposition",
            AspectKind::Trine => "Trine",
            AspectKind::Square => "Square",
            AspectKind::Sextile => "Sextile",
            AspectKind::Quincunx => "Quincunx",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Defining angle and allowed orb for an aspect kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    pub angle: f64,
    pub orb: f64,
}

const fn definition(kind: AspectKind, angle: f64, orb: f64) -> AspectDefinition {
    AspectDefinition { kind, angle, orb }
}

/// Aspect table, in detection order. Orb ranges do not overlap.
pub const ASPECT_DEFINITIONS: [AspectDefinition; 6] = [
    definition(AspectKind::Conjunction, 0.0, 8.0),
    definition(AspectKind::Opposition, 180.0, 8.0),
    definition(AspectKind::Trine, 120.0, 7.0),
    definition(AspectKind::Square, 90.0, 6.0),
    definition(AspectKind::Sextile, 60.0, 4.0),
    definition(AspectKind::Quincunx, 150.0, 3.0),
];

/// Match between two longitudes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectCore {
    pub kind: AspectKind,
    /// Shortest separation of the two longitudes, 0-180
    pub exact_angle: f64,
    /// Deviation from the defining angle
    pub orb: f64,
}

/// Reference to a body in the chart's body list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectObjectRef {
    pub index: usize,
    pub object_id: &'static str,
}

/// An aspect between two chart bodies
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aspect {
    /// `<Kind>-<from id>-<to id>`
    pub id: String,
    pub kind: AspectKind,
    pub from: AspectObjectRef,
    pub to: AspectObjectRef,
    pub exact_angle: f64,
    pub orb: f64,
}
