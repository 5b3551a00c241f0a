// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! House-Lite Geometry Planning
//!
//! Host-independent arithmetic behind building generation: rectangle
//! envelopes with named wall roles, opening insertion points and the ridge
//! profile of a gable extrusion roof. All lengths are in the internal unit.

pub mod envelope;
pub mod error;
pub mod opening;
pub mod roof;
pub mod segment;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use envelope::{plan_envelope, rectangle_corners, Envelope, WallRole};
pub use error::{Error, Result};
pub use opening::{insertion_point, OpeningKind};
pub use roof::{
    plan_extrusion_bounds, plan_ridge_profile, ExtrusionBounds, PlanePlacement, RidgeInputs,
    RoofProfile,
};
pub use segment::Segment;

/// Distance below which two points are considered coincident
pub const TOLERANCE: f64 = 1e-9;
