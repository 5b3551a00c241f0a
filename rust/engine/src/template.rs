// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Starting content for an in-memory document.
//!
//! A host project template ships levels and a loaded family catalog. This
//! module adds the equivalent to a [`MemoryDocument`]: the two levels and the
//! four catalog types a [`GenerationConfig`] names, with nominal dimensions.
//! Door and window types are added inactive, the way freshly loaded family
//! symbols are.

use house_lite_core::{
    meters_to_internal, to_internal, Category, ElementId, LengthUnit, ParamValue, ParameterKey,
    Parameters,
};
use house_lite_document::MemoryDocument;

use crate::config::{CatalogName, GenerationConfig};

/// Exterior wall total width
pub const WALL_WIDTH_MM: f64 = 380.0;
/// Door leaf width and height
pub const DOOR_SIZE_MM: (f64, f64) = (915.0, 2134.0);
/// Window width and height
pub const WINDOW_SIZE_MM: (f64, f64) = (610.0, 1220.0);
/// Roof assembly thickness
pub const ROOF_THICKNESS_MM: f64 = 400.0;

/// Ids of the template elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateIds {
    pub base_level: ElementId,
    pub roof_level: ElementId,
    pub wall_type: ElementId,
    pub door_type: ElementId,
    pub window_type: ElementId,
    pub roof_type: ElementId,
}

fn mm(value: f64) -> ParamValue {
    ParamValue::Length(to_internal(value, LengthUnit::Millimeters))
}

fn family_of<'a>(name: &'a CatalogName, fallback: &'a str) -> &'a str {
    name.family.as_deref().unwrap_or(fallback)
}

/// Seed `doc` with the levels and catalog types `config` refers to.
///
/// The roof level sits at the top of the walls.
pub fn seed_template(doc: &mut MemoryDocument, config: &GenerationConfig) -> TemplateIds {
    let base_level = doc.add_level(&config.base_level, 0.0);
    let roof_level = doc.add_level(&config.roof_level, meters_to_internal(config.wall_height_m));

    let mut wall = Parameters::default();
    wall.insert(ParameterKey::Width, mm(WALL_WIDTH_MM));
    let wall_type = doc.add_catalog_type(
        &config.wall_type.name,
        family_of(&config.wall_type, "Basic Wall"),
        Category::Walls,
        wall,
        true,
    );

    let mut door = Parameters::default();
    door.insert(ParameterKey::Width, mm(DOOR_SIZE_MM.0));
    door.insert(ParameterKey::Height, mm(DOOR_SIZE_MM.1));
    let door_type = doc.add_catalog_type(
        &config.door_type.name,
        family_of(&config.door_type, "Single-Flush"),
        Category::Doors,
        door,
        false,
    );

    let mut window = Parameters::default();
    window.insert(ParameterKey::Width, mm(WINDOW_SIZE_MM.0));
    window.insert(ParameterKey::Height, mm(WINDOW_SIZE_MM.1));
    let window_type = doc.add_catalog_type(
        &config.window_type.name,
        family_of(&config.window_type, "Fixed"),
        Category::Windows,
        window,
        false,
    );

    let mut roof = Parameters::default();
    roof.insert(ParameterKey::DefaultThickness, mm(ROOF_THICKNESS_MM));
    let roof_type = doc.add_catalog_type(
        &config.roof_type.name,
        family_of(&config.roof_type, "Basic Roof"),
        Category::Roofs,
        roof,
        true,
    );

    tracing::debug!(elements = doc.len(), "Seeded template");
    TemplateIds {
        base_level,
        roof_level,
        wall_type,
        door_type,
        window_type,
        roof_type,
    }
}
