// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Gable roof planning
//!
//! The roof is a two-segment ridge profile drawn above one side wall and
//! extruded across the envelope. The profile base sits on top of the walls
//! (wall height + roof thickness) and is stretched past the wall ends by half
//! a wall width on each side so the roof covers the wall thickness; the apex
//! rises a fixed amount above the middle of the base.

use crate::envelope::check_dimension;
use crate::error::{Error, Result};
use crate::segment::Segment;
use crate::TOLERANCE;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Length of the axes used to place the extrusion reference plane
pub const REFERENCE_PLANE_EXTENT: f64 = 20.0;

/// Inputs of the ridge profile, all in the internal unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RidgeInputs {
    /// Centerline of the wall the ridge runs along
    pub side: Segment,
    /// Width of the wall the extrusion spans (outset at each profile end)
    pub front_width: f64,
    pub wall_height: f64,
    pub roof_thickness: f64,
    /// Apex height above the profile base
    pub ridge_rise: f64,
}

/// Ridge profile: base start -> apex -> base end
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoofProfile {
    pub base_start: Point3<f64>,
    pub apex: Point3<f64>,
    pub base_end: Point3<f64>,
}

impl RoofProfile {
    /// The two profile edges, in drawing order
    pub fn segments(&self) -> [Segment; 2] {
        [
            Segment::new(self.base_start, self.apex),
            Segment::new(self.apex, self.base_end),
        ]
    }

    /// Horizontal direction of the ridge base line
    pub fn ridge_direction(&self) -> Result<Vector3<f64>> {
        let base = self.base_end - self.base_start;
        Vector3::new(base.x, base.y, 0.0)
            .try_normalize(TOLERANCE)
            .ok_or(Error::CollinearProfile)
    }
}

/// Extrusion extents along the reference plane normal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtrusionBounds {
    pub start: f64,
    pub end: f64,
}

impl ExtrusionBounds {
    /// Bounds centered on the reference plane
    pub fn symmetric(length: f64) -> Self {
        let start = -length / 2.0;
        Self {
            start,
            end: length + start,
        }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }
}

/// Reference plane given the way a modeling host expects it: a bubble end, a
/// free end and a cut vector spanning the plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanePlacement {
    pub bubble_end: Point3<f64>,
    pub free_end: Point3<f64>,
    pub cut_vector: Vector3<f64>,
}

impl PlanePlacement {
    /// Vertical plane through the origin containing `ridge_direction`
    pub fn through_origin(ridge_direction: &Vector3<f64>) -> Self {
        Self {
            bubble_end: Point3::origin(),
            free_end: Point3::new(0.0, 0.0, REFERENCE_PLANE_EXTENT),
            cut_vector: ridge_direction * REFERENCE_PLANE_EXTENT,
        }
    }

    /// Unit normal of the plane (the extrusion direction)
    pub fn normal(&self) -> Result<Vector3<f64>> {
        (self.free_end - self.bubble_end)
            .cross(&self.cut_vector)
            .try_normalize(TOLERANCE)
            .ok_or(Error::DegenerateSegment {
                x: self.bubble_end.x,
                y: self.bubble_end.y,
                z: self.bubble_end.z,
            })
    }
}

/// Build the ridge profile above `inputs.side`
pub fn plan_ridge_profile(inputs: &RidgeInputs) -> Result<RoofProfile> {
    check_dimension("wall height", inputs.wall_height)?;
    check_non_negative("roof thickness", inputs.roof_thickness)?;
    check_non_negative("wall width", inputs.front_width)?;
    check_non_negative("ridge rise", inputs.ridge_rise)?;

    let along = inputs.side.direction()?;
    let lift = Vector3::new(0.0, 0.0, inputs.wall_height + inputs.roof_thickness);
    let outset = along * (inputs.front_width / 2.0);

    let base_start = inputs.side.start + lift - outset;
    let base_end = inputs.side.end + lift + outset;
    let apex = nalgebra::center(&base_start, &base_end) + Vector3::new(0.0, 0.0, inputs.ridge_rise);

    let profile = RoofProfile {
        base_start,
        apex,
        base_end,
    };
    check_not_collinear(&profile)?;
    Ok(profile)
}

/// Extrusion bounds spanning `front` plus its wall width, centered
pub fn plan_extrusion_bounds(front: &Segment, front_width: f64) -> Result<ExtrusionBounds> {
    if front.is_degenerate() {
        return Err(Error::DegenerateSegment {
            x: front.start.x,
            y: front.start.y,
            z: front.start.z,
        });
    }
    check_non_negative("wall width", front_width)?;
    let length = front.length() + front_width;
    check_dimension("extrusion length", length)?;
    Ok(ExtrusionBounds::symmetric(length))
}

fn check_not_collinear(profile: &RoofProfile) -> Result<()> {
    let base = profile.base_end - profile.base_start;
    let rise = profile.apex - profile.base_start;
    let scale = base.norm().max(rise.norm()).max(1.0);
    if base.cross(&rise).norm() < TOLERANCE * scale * scale {
        return Err(Error::CollinearProfile);
    }
    Ok(())
}

fn check_non_negative(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidDimension { name, value });
    }
    Ok(())
}
