// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bounded line segments (wall centerlines, roof profile edges)

use crate::error::{Error, Result};
use crate::TOLERANCE;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Ordered pair of endpoints
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point3<f64>,
    pub end: Point3<f64>,
}

impl Segment {
    #[inline]
    pub fn new(start: Point3<f64>, end: Point3<f64>) -> Self {
        Self { start, end }
    }

    /// Create a segment, rejecting coincident endpoints
    pub fn bounded(start: Point3<f64>, end: Point3<f64>) -> Result<Self> {
        let segment = Self::new(start, end);
        if segment.is_degenerate() {
            return Err(Error::DegenerateSegment {
                x: start.x,
                y: start.y,
                z: start.z,
            });
        }
        Ok(segment)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    #[inline]
    pub fn midpoint(&self) -> Point3<f64> {
        nalgebra::center(&self.start, &self.end)
    }

    /// Vector from start to end
    #[inline]
    pub fn vector(&self) -> Vector3<f64> {
        self.end - self.start
    }

    /// Unit direction from start to end
    pub fn direction(&self) -> Result<Vector3<f64>> {
        self.vector()
            .try_normalize(TOLERANCE)
            .ok_or(Error::DegenerateSegment {
                x: self.start.x,
                y: self.start.y,
                z: self.start.z,
            })
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.length() < TOLERANCE
    }

    /// Horizontal distance from `point` to this segment, ignoring Z
    pub fn plan_distance_to(&self, point: &Point3<f64>) -> f64 {
        let a = Vector3::new(self.start.x, self.start.y, 0.0);
        let b = Vector3::new(self.end.x, self.end.y, 0.0);
        let p = Vector3::new(point.x, point.y, 0.0);

        let ab = b - a;
        let len_sq = ab.norm_squared();
        if len_sq < TOLERANCE * TOLERANCE {
            return (p - a).norm();
        }

        let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
        (p - (a + ab * t)).norm()
    }
}
