// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element records stored in a document.

use house_lite_core::{Category, ElementId, Parameters};
use house_lite_geometry::{ExtrusionBounds, PlanePlacement, Segment};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Discriminant for element classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementClass {
    Level,
    CatalogType,
    Wall,
    FamilyInstance,
    ReferencePlane,
    ExtrusionRoof,
}

impl ElementClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementClass::Level => "Level",
            ElementClass::CatalogType => "CatalogType",
            ElementClass::Wall => "Wall",
            ElementClass::FamilyInstance => "FamilyInstance",
            ElementClass::ReferencePlane => "ReferencePlane",
            ElementClass::ExtrusionRoof => "ExtrusionRoof",
        }
    }
}

impl std::fmt::Display for ElementClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named element and its class-specific data.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub data: ElementData,
}

impl Element {
    pub fn class(&self) -> ElementClass {
        self.data.class()
    }
}

/// Class-specific element data.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementData {
    Level(LevelData),
    CatalogType(CatalogTypeData),
    Wall(WallData),
    FamilyInstance(FamilyInstanceData),
    ReferencePlane(PlanePlacement),
    ExtrusionRoof(ExtrusionRoofData),
}

impl ElementData {
    pub fn class(&self) -> ElementClass {
        match self {
            ElementData::Level(_) => ElementClass::Level,
            ElementData::CatalogType(_) => ElementClass::CatalogType,
            ElementData::Wall(_) => ElementClass::Wall,
            ElementData::FamilyInstance(_) => ElementClass::FamilyInstance,
            ElementData::ReferencePlane(_) => ElementClass::ReferencePlane,
            ElementData::ExtrusionRoof(_) => ElementClass::ExtrusionRoof,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LevelData {
    pub elevation: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogTypeData {
    pub family_name: String,
    pub category: Category,
    pub active: bool,
    pub parameters: Parameters,
}

/// A straight wall standing on a level.
#[derive(Debug, Clone, PartialEq)]
pub struct WallData {
    pub type_id: ElementId,
    pub level_id: ElementId,
    /// Location line (centerline) at the level's base.
    pub curve: Segment,
    pub height: f64,
    /// Copied from the wall type when the wall is created.
    pub width: f64,
    pub structural: bool,
}

/// A door or window hosted by a wall.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyInstanceData {
    pub category: Category,
    pub type_id: ElementId,
    pub host: ElementId,
    pub level_id: ElementId,
    pub location: Point3<f64>,
}

/// A roof extruded from an open profile along a reference plane normal.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtrusionRoofData {
    pub type_id: ElementId,
    pub level_id: ElementId,
    pub plane: ElementId,
    pub profile: Vec<Segment>,
    pub bounds: ExtrusionBounds,
}
