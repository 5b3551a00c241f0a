// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Length unit conversion
//!
//! The host document stores every length in decimal feet. Generation
//! parameters are given in human units (meters by default) and converted at
//! the boundary.

use serde::{Deserialize, Serialize};

/// Exact length of one international foot in meters
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Human length units accepted by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Millimeters,
    Centimeters,
    Meters,
    Inches,
    Feet,
}

impl LengthUnit {
    /// Multiplier converting one of this unit to meters
    #[inline]
    pub fn meters_per_unit(self) -> f64 {
        match self {
            LengthUnit::Millimeters => 1e-3,
            LengthUnit::Centimeters => 1e-2,
            LengthUnit::Meters => 1.0,
            LengthUnit::Inches => METERS_PER_FOOT / 12.0,
            LengthUnit::Feet => METERS_PER_FOOT,
        }
    }
}

/// Convert a length in `unit` to the internal unit
#[inline]
pub fn to_internal(value: f64, unit: LengthUnit) -> f64 {
    value * unit.meters_per_unit() / METERS_PER_FOOT
}

/// Convert an internal length back to `unit`
#[inline]
pub fn from_internal(value: f64, unit: LengthUnit) -> f64 {
    value * METERS_PER_FOOT / unit.meters_per_unit()
}

/// Convert meters to the internal unit
#[inline]
pub fn meters_to_internal(meters: f64) -> f64 {
    to_internal(meters, LengthUnit::Meters)
}

/// Convert an internal length to meters
#[inline]
pub fn internal_to_meters(value: f64) -> f64 {
    from_internal(value, LengthUnit::Meters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_meters_to_feet() {
        assert_relative_eq!(meters_to_internal(0.3048), 1.0, epsilon = 1e-12);
        assert_relative_eq!(meters_to_internal(1.0), 3.280_839_895, epsilon = 1e-9);
        assert_eq!(meters_to_internal(0.0), 0.0);
        assert_relative_eq!(meters_to_internal(-2.0), -2.0 / METERS_PER_FOOT);
    }

    #[test]
    fn test_unit_multipliers() {
        assert_relative_eq!(to_internal(12.0, LengthUnit::Inches), 1.0, epsilon = 1e-12);
        assert_relative_eq!(to_internal(1.0, LengthUnit::Feet), 1.0);
        assert_relative_eq!(to_internal(1000.0, LengthUnit::Millimeters), meters_to_internal(1.0));
        assert_relative_eq!(to_internal(100.0, LengthUnit::Centimeters), meters_to_internal(1.0));
    }

    #[test]
    fn test_back_conversion() {
        let internal = meters_to_internal(3.0);
        assert_relative_eq!(internal_to_meters(internal), 3.0, epsilon = 1e-12);
        assert_relative_eq!(from_internal(internal, LengthUnit::Millimeters), 3000.0, epsilon = 1e-9);
    }
}
