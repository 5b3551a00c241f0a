// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Roof generation.
//!
//! [`RoofStrategy`] is the seam for roof shapes; [`RidgedExtrusionRoof`]
//! builds a symmetric gable whose ridge runs parallel to the right wall and
//! whose extrusion spans the front wall plus its thickness. The roof is sized
//! from the created walls, so envelope changes carry over without re-entering
//! roof geometry.

use house_lite_core::{meters_to_internal, CatalogTypeInfo, ElementId, LevelInfo, ParameterKey};
use house_lite_document::DocumentContext;
use house_lite_geometry::{
    plan_extrusion_bounds, plan_ridge_profile, Envelope, ExtrusionBounds, PlanePlacement,
    RidgeInputs, RoofProfile,
};
use serde::Serialize;

use crate::config::DEFAULT_RIDGE_RISE_M;
use crate::error::Result;

/// Elements and geometry produced by a roof strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoofOutcome {
    pub roof: ElementId,
    pub reference_plane: ElementId,
    pub profile: RoofProfile,
    pub bounds: ExtrusionBounds,
    /// Roof type thickness, internal unit.
    pub thickness: f64,
}

/// A way of covering an envelope with a roof.
pub trait RoofStrategy: std::fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn build(
        &self,
        doc: &mut dyn DocumentContext,
        walls: &Envelope<ElementId>,
        level: &LevelInfo,
        roof_type: &CatalogTypeInfo,
    ) -> Result<RoofOutcome>;
}

/// Gable roof extruded from a two-segment ridge profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RidgedExtrusionRoof {
    pub wall_height_m: f64,
    pub ridge_rise_m: f64,
}

impl RidgedExtrusionRoof {
    pub fn new(wall_height_m: f64) -> Self {
        Self {
            wall_height_m,
            ridge_rise_m: DEFAULT_RIDGE_RISE_M,
        }
    }

    pub fn with_ridge_rise(mut self, ridge_rise_m: f64) -> Self {
        self.ridge_rise_m = ridge_rise_m;
        self
    }
}

impl RoofStrategy for RidgedExtrusionRoof {
    fn name(&self) -> &'static str {
        "ridged-extrusion"
    }

    fn build(
        &self,
        doc: &mut dyn DocumentContext,
        walls: &Envelope<ElementId>,
        level: &LevelInfo,
        roof_type: &CatalogTypeInfo,
    ) -> Result<RoofOutcome> {
        let thickness = roof_type
            .length_parameter(ParameterKey::DefaultThickness)
            .ok_or_else(|| house_lite_document::Error::MissingParameter {
                name: roof_type.name.clone(),
                parameter: ParameterKey::DefaultThickness,
            })?;

        let front = doc.wall(walls.front)?;
        let side = doc.wall(walls.right)?;

        let profile = plan_ridge_profile(&RidgeInputs {
            side: side.curve,
            front_width: front.width,
            wall_height: meters_to_internal(self.wall_height_m),
            roof_thickness: thickness,
            ridge_rise: meters_to_internal(self.ridge_rise_m),
        })?;
        let bounds = plan_extrusion_bounds(&front.curve, front.width)?;

        let placement = PlanePlacement::through_origin(&profile.ridge_direction()?);
        let reference_plane = doc.create_reference_plane(&placement)?;

        let roof = doc.create_extrusion_roof(
            &profile.segments(),
            reference_plane,
            level.id,
            roof_type.id,
            bounds,
        )?;

        tracing::info!(
            strategy = self.name(),
            level = %level.name,
            apex_z = profile.apex.z,
            span = bounds.length(),
            "Roof created"
        );

        Ok(RoofOutcome {
            roof,
            reference_plane,
            profile,
            bounds,
            thickness,
        })
    }
}
