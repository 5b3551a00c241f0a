// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rectangular building envelope
//!
//! The envelope is a closed loop of four wall centerlines in the horizontal
//! plane, centered on the origin. Walls are addressed by role rather than by
//! position so downstream steps (door on the front, ridge along the right
//! side) cannot silently pick the wrong wall.
//!
//! ```text
//!        back (+y)
//!   3 ───────────── 2
//!   │               │
//! left            right
//!   │               │
//!   0 ───────────── 1
//!        front (-y)
//! ```

use crate::error::{Error, Result};
use crate::segment::Segment;
use crate::TOLERANCE;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Role of a wall in the envelope, in loop order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WallRole {
    /// Wall 0, south side, runs +x
    Front,
    /// Wall 1, east side, runs +y
    Right,
    /// Wall 2, north side, runs -x
    Back,
    /// Wall 3, west side, runs -y
    Left,
}

impl WallRole {
    /// All roles in loop order.
    pub const ALL: [WallRole; 4] = [WallRole::Front, WallRole::Right, WallRole::Back, WallRole::Left];

    /// Position of the wall in the loop.
    pub fn index(self) -> usize {
        match self {
            WallRole::Front => 0,
            WallRole::Right => 1,
            WallRole::Back => 2,
            WallRole::Left => 3,
        }
    }

    /// The wall that starts where this one ends.
    pub fn next(self) -> WallRole {
        WallRole::ALL[(self.index() + 1) % 4]
    }

    /// The parallel wall across the envelope.
    pub fn opposite(self) -> WallRole {
        WallRole::ALL[(self.index() + 2) % 4]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WallRole::Front => "front",
            WallRole::Right => "right",
            WallRole::Back => "back",
            WallRole::Left => "left",
        }
    }
}

impl std::fmt::Display for WallRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Four values keyed by wall role.
///
/// Used for planned centerlines (`Envelope<Segment>`) and for the created
/// wall elements (`Envelope<ElementId>`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub front: T,
    pub right: T,
    pub back: T,
    pub left: T,
}

impl<T> Envelope<T> {
    pub fn get(&self, role: WallRole) -> &T {
        match role {
            WallRole::Front => &self.front,
            WallRole::Right => &self.right,
            WallRole::Back => &self.back,
            WallRole::Left => &self.left,
        }
    }

    /// Iterate `(role, value)` pairs in loop order.
    pub fn iter(&self) -> impl Iterator<Item = (WallRole, &T)> {
        WallRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }

    /// Fallible map; stops at the first error, in loop order.
    pub fn try_map<U, E, F>(&self, mut f: F) -> std::result::Result<Envelope<U>, E>
    where
        F: FnMut(WallRole, &T) -> std::result::Result<U, E>,
    {
        Ok(Envelope {
            front: f(WallRole::Front, &self.front)?,
            right: f(WallRole::Right, &self.right)?,
            back: f(WallRole::Back, &self.back)?,
            left: f(WallRole::Left, &self.left)?,
        })
    }
}

/// Closed corner loop of a centered rectangle: 4 distinct corners followed
/// by the first corner again, so consecutive pairs yield exactly 4 walls.
pub fn rectangle_corners(width: f64, depth: f64) -> [Point3<f64>; 5] {
    let dx = width / 2.0;
    let dy = depth / 2.0;
    [
        Point3::new(-dx, -dy, 0.0),
        Point3::new(dx, -dy, 0.0),
        Point3::new(dx, dy, 0.0),
        Point3::new(-dx, dy, 0.0),
        Point3::new(-dx, -dy, 0.0),
    ]
}

/// Plan the four wall centerlines of a `width` x `depth` rectangle.
pub fn plan_envelope(width: f64, depth: f64) -> Result<Envelope<Segment>> {
    check_dimension("width", width)?;
    check_dimension("depth", depth)?;

    let corners = rectangle_corners(width, depth);
    let wall = |i: usize| Segment::bounded(corners[i], corners[i + 1]);

    let envelope = Envelope {
        front: wall(0)?,
        right: wall(1)?,
        back: wall(2)?,
        left: wall(3)?,
    };
    check_closed(&envelope)?;
    Ok(envelope)
}

/// Verify that every wall ends where the next one starts.
pub fn check_closed(envelope: &Envelope<Segment>) -> Result<()> {
    for (role, segment) in envelope.iter() {
        let next = envelope.get(role.next());
        if (segment.end - next.start).norm() > TOLERANCE {
            return Err(Error::OpenEnvelope(role.as_str()));
        }
    }
    Ok(())
}

/// Interior angle (radians) between a wall and the next one.
pub fn corner_angle(envelope: &Envelope<Segment>, role: WallRole) -> Result<f64> {
    let incoming = envelope.get(role).direction()?;
    let outgoing = envelope.get(role.next()).direction()?;
    Ok((-incoming).angle(&outgoing))
}

pub(crate) fn check_dimension(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidDimension { name, value });
    }
    Ok(())
}
