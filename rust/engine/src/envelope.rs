// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Envelope creation: four walls closing a centered rectangle.

use house_lite_core::{meters_to_internal, ElementId};
use house_lite_document::DocumentContext;
use house_lite_geometry::{plan_envelope, Envelope};

use crate::error::Result;

/// Creates the four envelope walls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeBuilder {
    pub width_m: f64,
    pub depth_m: f64,
    pub height_m: f64,
    pub structural: bool,
}

impl EnvelopeBuilder {
    pub fn new(width_m: f64, depth_m: f64, height_m: f64) -> Self {
        Self {
            width_m,
            depth_m,
            height_m,
            structural: false,
        }
    }

    /// Create one wall per envelope side on `level`, returned by role.
    pub fn build(
        &self,
        doc: &mut dyn DocumentContext,
        wall_type: ElementId,
        level: ElementId,
    ) -> Result<Envelope<ElementId>> {
        let plan = plan_envelope(meters_to_internal(self.width_m), meters_to_internal(self.depth_m))?;
        let height = meters_to_internal(self.height_m);

        let walls = plan.try_map(|role, curve| {
            let id = doc.create_wall(curve, wall_type, level, height, self.structural)?;
            tracing::debug!(%role, ?id, length = curve.length(), "Wall created");
            Ok::<_, crate::error::Error>(id)
        })?;

        tracing::info!(
            width_m = self.width_m,
            depth_m = self.depth_m,
            height_m = self.height_m,
            "Envelope walls created"
        );
        Ok(walls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::seed_template;
    use crate::GenerationConfig;
    use approx::assert_relative_eq;
    use house_lite_document::{ElementClass, MemoryDocument};
    use house_lite_geometry::WallRole;

    #[test]
    fn creates_four_walls_by_role() {
        let mut doc = MemoryDocument::new();
        let ids = seed_template(&mut doc, &GenerationConfig::default());
        doc.begin_transaction("walls").unwrap();

        let walls = EnvelopeBuilder::new(10.0, 5.0, 3.0)
            .build(&mut doc, ids.wall_type, ids.base_level)
            .unwrap();
        assert_eq!(doc.count(ElementClass::Wall), 4);

        let front = doc.wall(walls.front).unwrap();
        let right = doc.wall(walls.right).unwrap();
        assert_relative_eq!(front.curve.length(), meters_to_internal(10.0), epsilon = 1e-9);
        assert_relative_eq!(right.curve.length(), meters_to_internal(5.0), epsilon = 1e-9);
        assert_relative_eq!(front.height, meters_to_internal(3.0), epsilon = 1e-9);
        assert_eq!(front.level_id, ids.base_level);

        // Consecutive walls share corners
        for (role, id) in walls.iter() {
            let wall = doc.wall(*id).unwrap();
            let next = doc.wall(*walls.get(role.next())).unwrap();
            assert_relative_eq!(wall.curve.end, next.curve.start, epsilon = 1e-9);
        }
        assert_ne!(walls.get(WallRole::Front), walls.get(WallRole::Back));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let mut doc = MemoryDocument::new();
        let ids = seed_template(&mut doc, &GenerationConfig::default());
        doc.begin_transaction("walls").unwrap();

        let err = EnvelopeBuilder::new(0.0, 5.0, 3.0)
            .build(&mut doc, ids.wall_type, ids.base_level)
            .unwrap_err();
        assert!(matches!(err, crate::Error::InvalidGeometry(_)));
        assert_eq!(doc.count(ElementClass::Wall), 0);
    }
}
