// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end generation against an in-memory document.

use approx::assert_relative_eq;
use house_lite_core::{meters_to_internal, Category, ParameterKey};
use house_lite_document::{
    DocumentContext, ElementClass, ElementData, HostOperation, MemoryDocument,
};
use house_lite_engine::{
    seed_template, CatalogName, Error, GenerationConfig, GenerationState, LookupKind,
    OpeningPlacer, Orchestrator,
};
use house_lite_geometry::WallRole;

fn seeded(config: &GenerationConfig) -> MemoryDocument {
    let mut doc = MemoryDocument::new();
    seed_template(&mut doc, config);
    doc
}

#[test]
fn test_reference_house() {
    let config = GenerationConfig::default();
    let mut doc = seeded(&config);
    let report = Orchestrator::new(config).run(&mut doc).unwrap();

    assert_eq!(doc.count(ElementClass::Wall), 4);
    let lengths: Vec<f64> = report
        .walls
        .iter()
        .map(|(_, id)| doc.wall(*id).unwrap().curve.length())
        .collect();
    let expected = [10.0, 5.0, 10.0, 5.0].map(meters_to_internal);
    for (length, expected) in lengths.iter().zip(expected) {
        assert_relative_eq!(*length, expected, epsilon = 1e-9);
    }

    // One door on the front wall, at its base midpoint
    let front = doc.wall(report.walls.front).unwrap();
    assert_eq!(report.door.placed.len(), 1);
    let (role, door) = report.door.placed[0];
    assert_eq!(role, WallRole::Front);
    match &doc.element(door).unwrap().data {
        ElementData::FamilyInstance(instance) => {
            assert_eq!(instance.category, Category::Doors);
            assert_eq!(instance.host, report.walls.front);
            assert_relative_eq!(instance.location, front.curve.midpoint(), epsilon = 1e-9);
        }
        other => panic!("expected a door, got {other:?}"),
    }

    // Windows everywhere except the door wall
    let window_walls: Vec<_> = report.windows.placed.iter().map(|(role, _)| *role).collect();
    assert_eq!(window_walls, vec![WallRole::Right, WallRole::Back, WallRole::Left]);
    assert_eq!(report.windows.skipped, vec![WallRole::Front]);
    assert_eq!(doc.count(ElementClass::FamilyInstance), 4);

    // Roof apex and span
    let thickness = meters_to_internal(0.4);
    assert_relative_eq!(
        report.roof.profile.apex.z,
        meters_to_internal(3.0) + thickness + meters_to_internal(1.0),
        epsilon = 1e-9
    );
    let span = front.curve.length() + front.width;
    assert_relative_eq!(report.roof.bounds.length(), span, epsilon = 1e-9);
    assert_relative_eq!(report.roof.bounds.start, -span / 2.0, epsilon = 1e-9);
    assert_eq!(doc.count(ElementClass::ExtrusionRoof), 1);
    assert_eq!(doc.count(ElementClass::ReferencePlane), 1);

    assert_eq!(report.states.last(), Some(&GenerationState::Committed));
    assert_eq!(doc.committed_transactions(), ["Create"]);
}

#[test]
fn test_ridge_base_is_equidistant_from_apex() {
    let config = GenerationConfig {
        width_m: 12.0,
        depth_m: 8.0,
        wall_height_m: 2.7,
        ..GenerationConfig::default()
    };
    let mut doc = seeded(&config);
    let report = Orchestrator::new(config).run(&mut doc).unwrap();

    let profile = report.roof.profile;
    assert_relative_eq!(
        (profile.apex - profile.base_start).norm(),
        (profile.apex - profile.base_end).norm(),
        epsilon = 1e-9
    );
    assert_relative_eq!(
        profile.apex.z,
        meters_to_internal(2.7) + report.roof.thickness + meters_to_internal(1.0),
        epsilon = 1e-9
    );
}

#[test]
fn test_opening_steps_are_idempotent() {
    let config = GenerationConfig::default();
    let mut doc = seeded(&config);
    let report = Orchestrator::new(config).run(&mut doc).unwrap();

    let door_type = doc.catalog_types(Category::Doors)[0].id;
    let window_type = doc.catalog_types(Category::Windows)[0].id;
    let level = doc.levels()[0].id;
    let placer = OpeningPlacer::new(0.9);

    doc.begin_transaction("Again").unwrap();
    let door = placer.place_door(&mut doc, &report.walls, door_type, level).unwrap();
    let windows = placer.place_windows(&mut doc, &report.walls, window_type, level).unwrap();
    doc.commit_transaction().unwrap();

    assert!(door.placed.is_empty());
    assert!(windows.placed.is_empty());
    assert_eq!(windows.skipped.len(), 4);
    assert_eq!(doc.count(ElementClass::FamilyInstance), 4);
}

#[test]
fn test_lookup_miss_leaves_document_untouched() {
    let mut doc = seeded(&GenerationConfig::default());
    let before = doc.to_json().unwrap();

    let config = GenerationConfig {
        roof_type: CatalogName::in_family("Generic - 400mm", "Sloped Glazing"),
        ..GenerationConfig::default()
    };
    let err = Orchestrator::new(config).run(&mut doc).unwrap_err();

    assert!(matches!(
        err,
        Error::NotFound {
            kind: LookupKind::RoofType,
            ..
        }
    ));
    assert_eq!(doc.to_json().unwrap(), before);
    assert!(doc.committed_transactions().is_empty());
    assert_eq!(doc.begun_transactions(), 0);
    assert!(!doc.in_transaction());
}

#[test]
fn test_missing_level_is_reported_by_name() {
    let mut doc = seeded(&GenerationConfig::default());
    let before = doc.to_json().unwrap();
    let config = GenerationConfig {
        roof_level: "Roof".into(),
        ..GenerationConfig::default()
    };
    let err = Orchestrator::new(config).run(&mut doc).unwrap_err();
    assert_eq!(err.to_string(), "level \"Roof\" not found");
    assert_eq!(doc.to_json().unwrap(), before);
    assert_eq!(doc.begun_transactions(), 0);
}

#[test]
fn test_missing_wall_type_fails_before_transaction() {
    let mut doc = seeded(&GenerationConfig::default());
    let before = doc.to_json().unwrap();
    let config = GenerationConfig {
        wall_type: CatalogName::new("Generic - 200mm"),
        ..GenerationConfig::default()
    };
    let err = Orchestrator::new(config).run(&mut doc).unwrap_err();
    assert!(matches!(
        err,
        Error::NotFound {
            kind: LookupKind::WallType,
            ..
        }
    ));
    assert_eq!(doc.to_json().unwrap(), before);
    assert_eq!(doc.begun_transactions(), 0);
}

#[test]
fn test_roof_failure_rolls_back_everything() {
    let mut doc = seeded(&GenerationConfig::default());
    let before = doc.to_json().unwrap();
    doc.reject(HostOperation::CreateExtrusionRoof);

    let err = Orchestrator::new(GenerationConfig::default())
        .run(&mut doc)
        .unwrap_err();
    assert!(matches!(err, Error::HostOperation(_)));
    assert!(!doc.in_transaction());
    assert_eq!(doc.begun_transactions(), 1);
    assert_eq!(doc.to_json().unwrap(), before);

    // Door and window types were activated inside the transaction too
    let door_type = &doc.catalog_types(Category::Doors)[0];
    assert!(!door_type.active);

    doc.allow(HostOperation::CreateExtrusionRoof);
    let report = Orchestrator::new(GenerationConfig::default())
        .run(&mut doc)
        .unwrap();
    assert_eq!(report.openings_placed(), 4);
}

#[test]
fn test_roof_span_follows_wall_type_width() {
    let mut doc = MemoryDocument::new();
    let config = GenerationConfig::default();
    seed_template(&mut doc, &config);
    let report = Orchestrator::new(config.clone()).run(&mut doc).unwrap();
    let front = doc.wall(report.walls.front).unwrap();
    let wall_type = doc.catalog_type(front.type_id).unwrap();
    assert_relative_eq!(
        wall_type.length_parameter(ParameterKey::Width).unwrap(),
        front.width,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        report.roof.bounds.length(),
        front.curve.length() + front.width,
        epsilon = 1e-9
    );
}

#[test]
fn test_report_serializes() {
    let config = GenerationConfig::default();
    let mut doc = seeded(&config);
    let report = Orchestrator::new(config).run(&mut doc).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["states"].as_array().unwrap().len(), 7);
    assert_eq!(json["windows"]["skipped"][0], "Front");
}
