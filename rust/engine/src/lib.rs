// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # House-Lite Engine
//!
//! Procedural generation of a rectangular building through a host document:
//! four envelope walls, a door, windows and a ridged gable roof, created in
//! one transaction.
//!
//! ## Quick Start
//!
//! ```
//! use house_lite_document::MemoryDocument;
//! use house_lite_engine::{seed_template, GenerationConfig, Orchestrator};
//!
//! let config = GenerationConfig::default();
//! let mut doc = MemoryDocument::new();
//! seed_template(&mut doc, &config);
//!
//! let report = Orchestrator::new(config).run(&mut doc).unwrap();
//! assert_eq!(report.windows.placed.len(), 3);
//! ```
//!
//! ## Pipeline
//!
//! 1. [`ResolvedCatalog`] looks up levels and catalog types by name
//! 2. [`EnvelopeBuilder`] creates the walls
//! 3. [`OpeningPlacer`] places the door, then the windows
//! 4. a [`RoofStrategy`] covers the envelope
//!
//! [`Orchestrator`] runs the steps and owns the transaction.

pub mod config;
pub mod envelope;
pub mod error;
pub mod openings;
pub mod orchestrator;
pub mod resolve;
pub mod roof;
pub mod template;

pub use config::{
    CatalogName, GenerationConfig, DEFAULT_RIDGE_RISE_M, DEFAULT_SILL_HEIGHT_M,
    DEFAULT_TRANSACTION_NAME,
};
pub use envelope::EnvelopeBuilder;
pub use error::{Error, LookupKind, Result};
pub use openings::{OpeningPlacer, PlacementReport};
pub use orchestrator::{GenerationReport, GenerationState, Orchestrator};
pub use resolve::{find_by_name, resolve_level, resolve_type, ResolvedCatalog};
pub use roof::{RidgedExtrusionRoof, RoofOutcome, RoofStrategy};
pub use template::{seed_template, TemplateIds};
