use crate::aspects::types::{
    Aspect, AspectCore, AspectDefinition, AspectObjectRef, ASPECT_DEFINITIONS,
};
use crate::chart::ChartBody;
use crate::western::angle_difference;

/// Aspect calculator
pub struct AspectCalculator {
    definitions: &'static [AspectDefinition],
}

impl AspectCalculator {
    /// Create a calculator over the fixed aspect table
    pub fn new() -> Self {
        Self {
            definitions: &ASPECT_DEFINITIONS,
        }
    }

    /// Every aspect between every unordered pair of bodies.
    ///
    /// Pairs are visited as (i, j) with i < j in body order, so ids are stable
    /// as long as the body order is.
    pub fn compute_aspects(&self, bodies: &[ChartBody]) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let from = &bodies[i];
                let to = &bodies[j];

                for core in self.calculate_aspects(from.position.longitude, to.position.longitude)
                {
                    aspects.push(Aspect {
                        id: format!("{}-{}-{}", core.kind, from.body.id, to.body.id),
                        kind: core.kind,
                        from: AspectObjectRef {
                            index: i,
                            object_id: from.body.id,
                        },
                        to: AspectObjectRef {
                            index: j,
                            object_id: to.body.id,
                        },
                        exact_angle: core.exact_angle,
                        orb: core.orb,
                    });
                }
            }
        }
        aspects
    }

    /// All aspect kinds matched by two longitudes, in table order
    pub fn calculate_aspects(&self, lon1: f64, lon2: f64) -> Vec<AspectCore> {
        let angle_diff = angle_difference(lon1, lon2);

        self.definitions
            .iter()
            .filter_map(|def| {
                let orb = (angle_diff - def.angle).abs();
                (orb <= def.orb).then_some(AspectCore {
                    kind: def.kind,
                    exact_angle: angle_diff,
                    orb,
                })
            })
            .collect()
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::AspectKind;

    #[test]
    fn test_orb_boundary_is_inclusive() {
        let calculator = AspectCalculator::new();
        let aspects = calculator.calculate_aspects(0.0, 8.0);
        assert_eq!(aspects.len(), 1);
        assert_eq!(aspects[0].kind, AspectKind::Conjunction);
        assert_eq!(aspects[0].orb, 8.0);
        assert!(calculator.calculate_aspects(0.0, 8.5).is_empty());
    }

    #[test]
    fn test_orb_ranges_do_not_overlap() {
        let calculator = AspectCalculator::new();
        let mut separation = 0.0;
        while separation <= 180.0 {
            assert!(calculator.calculate_aspects(0.0, separation).len() <= 1);
            separation += 0.25;
        }
    }
}
