// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! One generation run, end to end.
//!
//! The orchestrator resolves every level and catalog type first, then opens a
//! single transaction and creates the envelope, the door, the windows and the
//! roof in that order. Any failure inside the transaction rolls the document
//! back; the caller gets one `Result` for the whole run.
//!
//! ```text
//! Idle -> TransactionOpen -> WallsCreated -> DoorPlaced -> WindowsPlaced
//!      -> RoofBuilt -> Committed
//!                   \-> RolledBack (any failure after TransactionOpen)
//! ```

use house_lite_core::ElementId;
use house_lite_document::DocumentContext;
use house_lite_geometry::Envelope;
use serde::Serialize;

use crate::config::GenerationConfig;
use crate::envelope::EnvelopeBuilder;
use crate::error::{Error, Result};
use crate::openings::{OpeningPlacer, PlacementReport};
use crate::resolve::ResolvedCatalog;
use crate::roof::{RidgedExtrusionRoof, RoofOutcome, RoofStrategy};

/// Phases of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GenerationState {
    Idle,
    TransactionOpen,
    WallsCreated,
    DoorPlaced,
    WindowsPlaced,
    RoofBuilt,
    Committed,
    RolledBack,
}

/// What a successful run created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationReport {
    pub walls: Envelope<ElementId>,
    pub door: PlacementReport,
    pub windows: PlacementReport,
    pub roof: RoofOutcome,
    /// Phases visited, in order.
    pub states: Vec<GenerationState>,
}

impl GenerationReport {
    /// Number of openings (doors and windows) placed in this run.
    pub fn openings_placed(&self) -> usize {
        self.door.placed.len() + self.windows.placed.len()
    }
}

/// Output of the steps run inside the transaction.
struct Created {
    walls: Envelope<ElementId>,
    door: PlacementReport,
    windows: PlacementReport,
    roof: RoofOutcome,
}

/// Drives a generation run against a document.
#[derive(Debug)]
pub struct Orchestrator {
    config: GenerationConfig,
    roof: Box<dyn RoofStrategy>,
}

impl Orchestrator {
    /// Orchestrator with the ridged extrusion roof.
    pub fn new(config: GenerationConfig) -> Self {
        let roof = RidgedExtrusionRoof::new(config.wall_height_m).with_ridge_rise(config.ridge_rise_m);
        Self {
            config,
            roof: Box::new(roof),
        }
    }

    /// Replace the roof strategy.
    pub fn with_roof(mut self, roof: Box<dyn RoofStrategy>) -> Self {
        self.roof = roof;
        self
    }

    /// Generate the building in `doc`.
    ///
    /// Lookups fail before any transaction is opened. Once the transaction is
    /// open, the first failing step rolls back every change.
    pub fn run(&self, doc: &mut dyn DocumentContext) -> Result<GenerationReport> {
        let mut states = vec![GenerationState::Idle];

        self.config.validate()?;
        let catalog = ResolvedCatalog::resolve(doc, &self.config)?;

        doc.begin_transaction(&self.config.transaction_name)?;
        states.push(GenerationState::TransactionOpen);
        tracing::info!(name = %self.config.transaction_name, "Generation started");

        match self.create(doc, &catalog, &mut states) {
            Ok(created) => {
                if let Err(e) = doc.commit_transaction() {
                    return Err(rollback(doc, &mut states, e.into()));
                }
                states.push(GenerationState::Committed);
                tracing::info!(
                    walls = 4,
                    openings = created.door.placed.len() + created.windows.placed.len(),
                    "Generation committed"
                );
                Ok(GenerationReport {
                    walls: created.walls,
                    door: created.door,
                    windows: created.windows,
                    roof: created.roof,
                    states,
                })
            }
            Err(e) => Err(rollback(doc, &mut states, e)),
        }
    }

    fn create(
        &self,
        doc: &mut dyn DocumentContext,
        catalog: &ResolvedCatalog,
        states: &mut Vec<GenerationState>,
    ) -> Result<Created> {
        let config = &self.config;

        let builder = EnvelopeBuilder {
            structural: config.structural_walls,
            ..EnvelopeBuilder::new(config.width_m, config.depth_m, config.wall_height_m)
        };
        let walls = builder.build(doc, catalog.wall_type.id, catalog.base_level_id())?;
        states.push(GenerationState::WallsCreated);

        let placer = OpeningPlacer::new(config.sill_height_m);
        let door = placer.place_door(doc, &walls, catalog.door_type.id, catalog.base_level_id())?;
        states.push(GenerationState::DoorPlaced);
        tracing::info!(placed = door.placed.len(), skipped = door.skipped.len(), "Door step done");

        let windows =
            placer.place_windows(doc, &walls, catalog.window_type.id, catalog.base_level_id())?;
        states.push(GenerationState::WindowsPlaced);
        tracing::info!(
            placed = windows.placed.len(),
            skipped = windows.skipped.len(),
            "Window step done"
        );

        let roof = self
            .roof
            .build(doc, &walls, &catalog.roof_level, &catalog.roof_type)?;
        states.push(GenerationState::RoofBuilt);

        Ok(Created {
            walls,
            door,
            windows,
            roof,
        })
    }
}

/// Roll back after `original` and return the error the caller should see.
fn rollback(doc: &mut dyn DocumentContext, states: &mut Vec<GenerationState>, original: Error) -> Error {
    tracing::warn!(error = %original, "Generation failed, rolling back");
    if !doc.in_transaction() {
        return original;
    }
    match doc.rollback_transaction() {
        Ok(()) => {
            states.push(GenerationState::RolledBack);
            tracing::debug!(?states, "Run abandoned");
            original
        }
        Err(failure) => Error::Transaction {
            original: original.to_string(),
            rollback: failure,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::seed_template;
    use house_lite_document::{ElementClass, HostOperation, MemoryDocument};

    fn seeded() -> MemoryDocument {
        let mut doc = MemoryDocument::new();
        seed_template(&mut doc, &GenerationConfig::default());
        doc
    }

    #[test]
    fn states_follow_the_happy_path() {
        let mut doc = seeded();
        let report = Orchestrator::new(GenerationConfig::default()).run(&mut doc).unwrap();
        assert_eq!(
            report.states,
            vec![
                GenerationState::Idle,
                GenerationState::TransactionOpen,
                GenerationState::WallsCreated,
                GenerationState::DoorPlaced,
                GenerationState::WindowsPlaced,
                GenerationState::RoofBuilt,
                GenerationState::Committed,
            ]
        );
        assert_eq!(report.openings_placed(), 4);
        assert!(!doc.in_transaction());
        assert_eq!(doc.committed_transactions(), ["Create"]);
    }

    #[test]
    fn invalid_config_fails_before_transaction() {
        let mut doc = seeded();
        let config = GenerationConfig {
            width_m: -1.0,
            ..GenerationConfig::default()
        };
        let err = Orchestrator::new(config).run(&mut doc).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(doc.committed_transactions().is_empty());
        assert_eq!(doc.count(ElementClass::Wall), 0);
    }

    #[test]
    fn rejected_opening_rolls_back_walls() {
        let mut doc = seeded();
        doc.reject(HostOperation::CreateOpening);
        let err = Orchestrator::new(GenerationConfig::default()).run(&mut doc).unwrap_err();
        assert!(matches!(err, Error::HostOperation(_)));
        assert!(!doc.in_transaction());
        assert_eq!(doc.count(ElementClass::Wall), 0);
        assert_eq!(doc.count(ElementClass::FamilyInstance), 0);
    }

    #[derive(Debug)]
    struct FailingRoof;

    impl RoofStrategy for FailingRoof {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn build(
            &self,
            _doc: &mut dyn DocumentContext,
            _walls: &Envelope<ElementId>,
            _level: &house_lite_core::LevelInfo,
            _roof_type: &house_lite_core::CatalogTypeInfo,
        ) -> Result<RoofOutcome> {
            Err(house_lite_geometry::Error::CollinearProfile.into())
        }
    }

    #[test]
    fn custom_roof_strategy_is_used() {
        let mut doc = seeded();
        let err = Orchestrator::new(GenerationConfig::default())
            .with_roof(Box::new(FailingRoof))
            .run(&mut doc)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidGeometry(house_lite_geometry::Error::CollinearProfile)
        ));
        assert_eq!(doc.count(ElementClass::Wall), 0);
    }
}
