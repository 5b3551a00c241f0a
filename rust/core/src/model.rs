// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-only views of document elements that the generator looks up by name:
//! levels and catalog types, plus their typed parameter tables.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::keys::ElementId;

/// Category a catalog type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Walls,
    Doors,
    Windows,
    Roofs,
}

impl Category {
    /// Returns the category name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Walls => "Walls",
            Category::Doors => "Doors",
            Category::Windows => "Windows",
            Category::Roofs => "Roofs",
        }
    }

    /// Whether instances of this category are hosted by a wall.
    pub fn is_wall_hosted(&self) -> bool {
        matches!(self, Category::Doors | Category::Windows)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Built-in parameters the generator reads from catalog types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ParameterKey {
    /// Wall type total width.
    Width,
    /// Opening height (doors, windows).
    Height,
    /// Nominal thickness of a roof type.
    DefaultThickness,
    /// Free-form description.
    Description,
}

/// A typed parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    /// Length in the internal unit.
    Length(f64),
    Integer(i64),
    Text(String),
}

impl ParamValue {
    pub fn as_length(&self) -> Option<f64> {
        match self {
            ParamValue::Length(v) => Some(*v),
            _ => None,
        }
    }
}

/// Parameter table attached to a catalog type.
pub type Parameters = FxHashMap<ParameterKey, ParamValue>;

/// Anything that can be found by its display name.
pub trait Named {
    fn name(&self) -> &str;
}

/// A named horizontal reference elevation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelInfo {
    pub id: ElementId,
    pub name: String,
    /// Elevation in the internal unit.
    pub elevation: f64,
}

impl Named for LevelInfo {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A named, reusable element definition (wall/door/window/roof type).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogTypeInfo {
    pub id: ElementId,
    pub name: String,
    pub family_name: String,
    pub category: Category,
    /// Whether the type is loaded and usable for placement.
    pub active: bool,
    pub parameters: Parameters,
}

impl CatalogTypeInfo {
    /// Length-valued parameter, if present.
    pub fn length_parameter(&self, key: ParameterKey) -> Option<f64> {
        self.parameters.get(&key).and_then(ParamValue::as_length)
    }
}

impl Named for CatalogTypeInfo {
    fn name(&self) -> &str {
        &self.name
    }
}
