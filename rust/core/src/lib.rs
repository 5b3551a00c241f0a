// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # House-Lite Core
//!
//! Shared vocabulary for procedural building generation: element keys,
//! catalog categories and parameters, and conversion between human length
//! units and the host document's internal unit (decimal feet).
//!
//! ```
//! use house_lite_core::units::meters_to_internal;
//!
//! let ten_meters = meters_to_internal(10.0);
//! assert!((ten_meters - 32.808_398_95).abs() < 1e-6);
//! ```

pub mod keys;
pub mod model;
pub mod units;

pub use keys::ElementId;
pub use model::{
    CatalogTypeInfo, Category, LevelInfo, Named, ParamValue, ParameterKey, Parameters,
};
pub use units::{from_internal, internal_to_meters, meters_to_internal, to_internal, LengthUnit};
