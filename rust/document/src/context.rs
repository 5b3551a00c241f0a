// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The host document seam.
//!
//! [`DocumentContext`] is everything the generator needs from a modeling
//! host: name-based queries over levels and catalog types, creation of
//! walls, hosted openings, reference planes and extrusion roofs, and a
//! single-level transaction. Implemented by [`crate::MemoryDocument`]; an
//! adapter for a real host implements the same trait.

use house_lite_core::{CatalogTypeInfo, Category, ElementId, LevelInfo};
use house_lite_geometry::{ExtrusionBounds, PlanePlacement, Segment};
use nalgebra::Point3;
use serde::Serialize;

use crate::error::Result;

/// Read-only view of a wall.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WallInfo {
    pub id: ElementId,
    pub type_id: ElementId,
    pub level_id: ElementId,
    /// Location line (centerline).
    pub curve: Segment,
    /// Total wall width, from the wall type.
    pub width: f64,
    pub height: f64,
}

/// Operations a modeling host exposes to the generator.
///
/// Lengths are in the internal unit. Every `create_*` and `activate_type`
/// call requires an open transaction.
pub trait DocumentContext {
    /// All levels, in document order.
    fn levels(&self) -> Vec<LevelInfo>;

    /// All catalog types of `category`, in document order.
    fn catalog_types(&self, category: Category) -> Vec<CatalogTypeInfo>;

    /// A single catalog type.
    fn catalog_type(&self, id: ElementId) -> Result<CatalogTypeInfo>;

    /// A single wall.
    fn wall(&self, id: ElementId) -> Result<WallInfo>;

    /// Openings (doors, windows) hosted by `wall`.
    fn find_inserts(&self, wall: ElementId) -> Result<Vec<ElementId>>;

    /// Make a family type usable for placement. Idempotent.
    fn activate_type(&mut self, type_id: ElementId) -> Result<()>;

    /// Create a straight wall along `curve` standing on `level`.
    fn create_wall(
        &mut self,
        curve: &Segment,
        wall_type: ElementId,
        level: ElementId,
        height: f64,
        structural: bool,
    ) -> Result<ElementId>;

    /// Place a door or window of `type_id` at `point`, hosted by `host`.
    fn create_opening(
        &mut self,
        point: &Point3<f64>,
        type_id: ElementId,
        host: ElementId,
        level: ElementId,
    ) -> Result<ElementId>;

    /// Create a reference plane from a bubble end, free end and cut vector.
    fn create_reference_plane(&mut self, placement: &PlanePlacement) -> Result<ElementId>;

    /// Create a roof by extruding `profile` along the normal of `plane`.
    fn create_extrusion_roof(
        &mut self,
        profile: &[Segment],
        plane: ElementId,
        level: ElementId,
        roof_type: ElementId,
        bounds: ExtrusionBounds,
    ) -> Result<ElementId>;

    /// Open the single document transaction.
    fn begin_transaction(&mut self, name: &str) -> Result<()>;

    /// Persist every change made since `begin_transaction`.
    fn commit_transaction(&mut self) -> Result<()>;

    /// Discard every change made since `begin_transaction`.
    fn rollback_transaction(&mut self) -> Result<()>;

    /// Whether a transaction is currently open.
    fn in_transaction(&self) -> bool;
}
