// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Door and window placement.
//!
//! Each opening sits at the midpoint of its host wall's centerline: doors at
//! the wall base, windows raised by the sill height. A wall that already
//! reports an insert is skipped, so running a step twice places nothing new.

use house_lite_core::{meters_to_internal, ElementId};
use house_lite_document::DocumentContext;
use house_lite_geometry::{insertion_point, Envelope, OpeningKind, WallRole};
use serde::Serialize;

use crate::error::Result;

/// Outcome of one placement step.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlacementReport {
    pub placed: Vec<(WallRole, ElementId)>,
    /// Walls left alone because they already host an opening.
    pub skipped: Vec<WallRole>,
}

impl PlacementReport {
    pub fn placed_ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.placed.iter().map(|(_, id)| *id)
    }
}

/// Places doors and windows on envelope walls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeningPlacer {
    pub sill_height_m: f64,
}

impl OpeningPlacer {
    pub fn new(sill_height_m: f64) -> Self {
        Self { sill_height_m }
    }

    /// Place one door at ground level in the middle of the front wall.
    pub fn place_door(
        &self,
        doc: &mut dyn DocumentContext,
        walls: &Envelope<ElementId>,
        door_type: ElementId,
        level: ElementId,
    ) -> Result<PlacementReport> {
        let mut report = PlacementReport::default();
        self.place(
            doc,
            OpeningKind::Door,
            WallRole::Front,
            walls.front,
            door_type,
            level,
            &mut report,
        )?;
        Ok(report)
    }

    /// Place one window at sill height in the middle of every wall that has
    /// no opening yet.
    pub fn place_windows(
        &self,
        doc: &mut dyn DocumentContext,
        walls: &Envelope<ElementId>,
        window_type: ElementId,
        level: ElementId,
    ) -> Result<PlacementReport> {
        let mut report = PlacementReport::default();
        for (role, wall) in walls.iter() {
            self.place(doc, OpeningKind::Window, role, *wall, window_type, level, &mut report)?;
        }
        Ok(report)
    }

    #[allow(clippy::too_many_arguments)]
    fn place(
        &self,
        doc: &mut dyn DocumentContext,
        kind: OpeningKind,
        role: WallRole,
        wall: ElementId,
        type_id: ElementId,
        level: ElementId,
        report: &mut PlacementReport,
    ) -> Result<()> {
        let info = doc.wall(wall)?;

        if !doc.catalog_type(type_id)?.active {
            doc.activate_type(type_id)?;
        }

        let inserts = doc.find_inserts(wall)?;
        if !inserts.is_empty() {
            tracing::warn!(%kind, %role, existing = inserts.len(), "Wall already hosts an opening, skipping");
            report.skipped.push(role);
            return Ok(());
        }

        let offset = match kind {
            OpeningKind::Door => 0.0,
            OpeningKind::Window => meters_to_internal(self.sill_height_m),
        };
        let point = insertion_point(&info.curve, offset);
        let id = doc.create_opening(&point, type_id, wall, level)?;
        tracing::debug!(%kind, %role, ?id, "Opening placed");
        report.placed.push((role, id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::EnvelopeBuilder;
    use crate::template::{seed_template, TemplateIds};
    use crate::GenerationConfig;
    use approx::assert_relative_eq;
    use house_lite_document::{ElementClass, ElementData, MemoryDocument};

    fn with_walls() -> (MemoryDocument, TemplateIds, Envelope<ElementId>) {
        let mut doc = MemoryDocument::new();
        let ids = seed_template(&mut doc, &GenerationConfig::default());
        doc.begin_transaction("openings").unwrap();
        let walls = EnvelopeBuilder::new(10.0, 5.0, 3.0)
            .build(&mut doc, ids.wall_type, ids.base_level)
            .unwrap();
        (doc, ids, walls)
    }

    fn location(doc: &MemoryDocument, id: ElementId) -> house_lite_geometry::Point3<f64> {
        match &doc.element(id).unwrap().data {
            ElementData::FamilyInstance(instance) => instance.location,
            other => panic!("expected a family instance, got {other:?}"),
        }
    }

    #[test]
    fn door_sits_at_front_midpoint() {
        let (mut doc, ids, walls) = with_walls();
        let placer = OpeningPlacer::new(0.9);

        let report = placer.place_door(&mut doc, &walls, ids.door_type, ids.base_level).unwrap();
        assert_eq!(report.placed.len(), 1);
        assert_eq!(report.placed[0].0, WallRole::Front);
        assert!(doc.catalog_type(ids.door_type).unwrap().active);

        let front = doc.wall(walls.front).unwrap();
        let point = location(&doc, report.placed[0].1);
        assert_relative_eq!(point, front.curve.midpoint(), epsilon = 1e-9);
    }

    #[test]
    fn door_step_is_idempotent() {
        let (mut doc, ids, walls) = with_walls();
        let placer = OpeningPlacer::new(0.9);

        placer.place_door(&mut doc, &walls, ids.door_type, ids.base_level).unwrap();
        let again = placer.place_door(&mut doc, &walls, ids.door_type, ids.base_level).unwrap();
        assert!(again.placed.is_empty());
        assert_eq!(again.skipped, vec![WallRole::Front]);
        assert_eq!(doc.count(ElementClass::FamilyInstance), 1);
    }

    #[test]
    fn windows_skip_the_door_wall() {
        let (mut doc, ids, walls) = with_walls();
        let placer = OpeningPlacer::new(0.9);
        placer.place_door(&mut doc, &walls, ids.door_type, ids.base_level).unwrap();

        let report = placer.place_windows(&mut doc, &walls, ids.window_type, ids.base_level).unwrap();
        let roles: Vec<_> = report.placed.iter().map(|(role, _)| *role).collect();
        assert_eq!(roles, vec![WallRole::Right, WallRole::Back, WallRole::Left]);
        assert_eq!(report.skipped, vec![WallRole::Front]);

        let back = doc.wall(walls.back).unwrap();
        let point = location(&doc, report.placed[1].1);
        assert_relative_eq!(point.z, meters_to_internal(0.9), epsilon = 1e-9);
        assert_relative_eq!(point.x, back.curve.midpoint().x, epsilon = 1e-9);
    }

    #[test]
    fn window_step_twice_places_nothing_new() {
        let (mut doc, ids, walls) = with_walls();
        let placer = OpeningPlacer::new(0.9);

        let first = placer.place_windows(&mut doc, &walls, ids.window_type, ids.base_level).unwrap();
        assert_eq!(first.placed_ids().count(), 4);
        let second = placer.place_windows(&mut doc, &walls, ids.window_type, ids.base_level).unwrap();
        assert!(second.placed.is_empty());
        assert_eq!(second.skipped.len(), 4);
        assert_eq!(doc.count(ElementClass::FamilyInstance), 4);
    }
}
