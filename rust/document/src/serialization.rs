// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON export of a document.
//!
//! Elements are written in creation order and slot map keys are mapped to
//! sequential ids, so two documents with the same content produce the same
//! bytes.

use house_lite_core::{Category, ElementId, ParamValue, ParameterKey};
use house_lite_geometry::{ExtrusionBounds, PlanePlacement, Segment};
use nalgebra::Point3;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::element::ElementData;
use crate::error::{Error, Result};
use crate::memory::MemoryDocument;

/// Serializable representation of a whole document.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    pub elements: Vec<ElementSnapshot>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ElementSnapshot {
    pub id: usize,
    pub name: String,
    #[serde(flatten)]
    pub data: DataSnapshot,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum DataSnapshot {
    Level {
        elevation: f64,
    },
    CatalogType {
        family_name: String,
        category: Category,
        active: bool,
        /// Sorted by key.
        parameters: Vec<(ParameterKey, ParamValue)>,
    },
    Wall {
        wall_type: usize,
        level: usize,
        curve: Segment,
        height: f64,
        width: f64,
        structural: bool,
    },
    FamilyInstance {
        category: Category,
        family_type: usize,
        host: usize,
        level: usize,
        location: Point3<f64>,
    },
    ReferencePlane {
        placement: PlanePlacement,
    },
    ExtrusionRoof {
        roof_type: usize,
        level: usize,
        plane: usize,
        profile: Vec<Segment>,
        bounds: ExtrusionBounds,
    },
}

impl MemoryDocument {
    /// Serializes the document to a pretty JSON string.
    pub fn to_json(&self) -> Result<String> {
        let snapshot = self.to_snapshot();
        serde_json::to_string_pretty(&snapshot).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Creates a serializable snapshot of the document.
    pub fn to_snapshot(&self) -> DocumentSnapshot {
        let ids: FxHashMap<ElementId, usize> = self
            .elements()
            .enumerate()
            .map(|(i, (key, _))| (key, i))
            .collect();
        // Dangling references cannot be created through the public API
        let id = |key: &ElementId| ids.get(key).copied().unwrap_or(usize::MAX);

        let elements = self
            .elements()
            .enumerate()
            .map(|(i, (_, element))| {
                let data = match &element.data {
                    ElementData::Level(level) => DataSnapshot::Level {
                        elevation: level.elevation,
                    },
                    ElementData::CatalogType(ty) => {
                        let mut parameters: Vec<_> = ty
                            .parameters
                            .iter()
                            .map(|(k, v)| (*k, v.clone()))
                            .collect();
                        parameters.sort_by_key(|(k, _)| *k);
                        DataSnapshot::CatalogType {
                            family_name: ty.family_name.clone(),
                            category: ty.category,
                            active: ty.active,
                            parameters,
                        }
                    }
                    ElementData::Wall(wall) => DataSnapshot::Wall {
                        wall_type: id(&wall.type_id),
                        level: id(&wall.level_id),
                        curve: wall.curve,
                        height: wall.height,
                        width: wall.width,
                        structural: wall.structural,
                    },
                    ElementData::FamilyInstance(instance) => DataSnapshot::FamilyInstance {
                        category: instance.category,
                        family_type: id(&instance.type_id),
                        host: id(&instance.host),
                        level: id(&instance.level_id),
                        location: instance.location,
                    },
                    ElementData::ReferencePlane(placement) => DataSnapshot::ReferencePlane {
                        placement: *placement,
                    },
                    ElementData::ExtrusionRoof(roof) => DataSnapshot::ExtrusionRoof {
                        roof_type: id(&roof.type_id),
                        level: id(&roof.level_id),
                        plane: id(&roof.plane),
                        profile: roof.profile.clone(),
                        bounds: roof.bounds,
                    },
                };
                ElementSnapshot {
                    id: i,
                    name: element.name.clone(),
                    data,
                }
            })
            .collect();

        DocumentSnapshot { elements }
    }
}
