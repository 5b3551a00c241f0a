// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Insertion points for wall-hosted openings

use crate::segment::Segment;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Opening classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpeningKind {
    Door,
    Window,
}

impl OpeningKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OpeningKind::Door => "door",
            OpeningKind::Window => "window",
        }
    }
}

impl std::fmt::Display for OpeningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Midpoint of a wall centerline raised by `vertical_offset`
///
/// Doors use an offset of zero (ground level); windows use the sill height.
#[inline]
pub fn insertion_point(centerline: &Segment, vertical_offset: f64) -> Point3<f64> {
    centerline.midpoint() + Vector3::new(0.0, 0.0, vertical_offset)
}
