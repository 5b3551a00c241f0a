// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # House-Lite Document
//!
//! The boundary between building generation and a modeling host.
//!
//! [`DocumentContext`] lists the host operations the generator performs:
//! element lookup, wall / opening / reference plane / roof creation and a
//! single all-or-nothing transaction. [`MemoryDocument`] implements it on an
//! arena of elements with snapshot rollback and deterministic JSON export,
//! so generation runs and is testable without a host application.

pub mod context;
pub mod element;
pub mod error;
pub mod memory;
pub mod serialization;

pub use context::{DocumentContext, WallInfo};
pub use element::{Element, ElementClass, ElementData};
pub use error::{Error, Result};
pub use memory::{HostOperation, MemoryDocument};
pub use serialization::DocumentSnapshot;
