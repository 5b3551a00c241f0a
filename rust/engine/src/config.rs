// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Generation parameters.
//!
//! Dimensions are in meters. Catalog entries are looked up by display name
//! and, when given, family name. Every field has a default, so a JSON file
//! only needs the values it changes:
//!
//! ```
//! use house_lite_engine::GenerationConfig;
//!
//! let config = GenerationConfig::from_json(r#"{ "width_m": 12.0 }"#).unwrap();
//! assert_eq!(config.width_m, 12.0);
//! assert_eq!(config.depth_m, 5.0);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Height of window insertion points above the wall base
pub const DEFAULT_SILL_HEIGHT_M: f64 = 0.9;

/// Height of the roof apex above the profile base
pub const DEFAULT_RIDGE_RISE_M: f64 = 1.0;

/// Name of the single generation transaction
pub const DEFAULT_TRANSACTION_NAME: &str = "Create";

/// A catalog entry reference: display name plus optional family name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogName {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

impl CatalogName {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            family: None,
        }
    }

    pub fn in_family(name: &str, family: &str) -> Self {
        Self {
            name: name.to_string(),
            family: Some(family.to_string()),
        }
    }
}

/// Everything a generation run needs besides the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub width_m: f64,
    pub depth_m: f64,
    pub wall_height_m: f64,
    /// Level the walls, door and windows are placed on.
    pub base_level: String,
    /// Level the roof is attached to.
    pub roof_level: String,
    pub wall_type: CatalogName,
    pub door_type: CatalogName,
    pub window_type: CatalogName,
    pub roof_type: CatalogName,
    pub sill_height_m: f64,
    pub ridge_rise_m: f64,
    pub structural_walls: bool,
    pub transaction_name: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width_m: 10.0,
            depth_m: 5.0,
            wall_height_m: 3.0,
            base_level: "Level 1".into(),
            roof_level: "Level 2".into(),
            wall_type: CatalogName::new("Exterior - Brick on Mtl. Stud 380mm"),
            door_type: CatalogName::in_family("0915 x 2134mm", "Single-Flush"),
            window_type: CatalogName::in_family("0610 x 1220mm", "Fixed"),
            roof_type: CatalogName::in_family("Generic - 400mm", "Basic Roof"),
            sill_height_m: DEFAULT_SILL_HEIGHT_M,
            ridge_rise_m: DEFAULT_RIDGE_RISE_M,
            structural_walls: false,
            transaction_name: DEFAULT_TRANSACTION_NAME.into(),
        }
    }
}

impl GenerationConfig {
    /// Parse a (partial) configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Reject values no run could succeed with.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("width_m", self.width_m),
            ("depth_m", self.depth_m),
            ("wall_height_m", self.wall_height_m),
            ("ridge_rise_m", self.ridge_rise_m),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::Config(format!("{name} must be positive, got {value}")));
            }
        }

        if !self.sill_height_m.is_finite() || self.sill_height_m < 0.0 {
            return Err(Error::Config(format!(
                "sill_height_m must not be negative, got {}",
                self.sill_height_m
            )));
        }

        if self.sill_height_m >= self.wall_height_m {
            return Err(Error::Config(format!(
                "sill height {} m must be below wall height {} m",
                self.sill_height_m, self.wall_height_m
            )));
        }
        Ok(())
    }
}
