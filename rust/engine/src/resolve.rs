// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Name-based lookup of levels and catalog types.
//!
//! Every lookup a run needs is resolved up front into a [`ResolvedCatalog`],
//! before any transaction is opened, so a missing name fails the run without
//! touching the document.

use house_lite_core::{CatalogTypeInfo, Category, ElementId, LevelInfo, Named};
use house_lite_document::DocumentContext;

use crate::config::{CatalogName, GenerationConfig};
use crate::error::{Error, LookupKind, Result};

/// First item in iteration order whose name is `name` and that satisfies
/// `predicate`.
pub fn find_by_name<'a, T, I, P>(items: I, name: &str, predicate: P) -> Option<&'a T>
where
    T: Named + 'a,
    I: IntoIterator<Item = &'a T>,
    P: Fn(&T) -> bool,
{
    items
        .into_iter()
        .find(|item| item.name() == name && predicate(item))
}

/// Find a level by name.
pub fn resolve_level(doc: &dyn DocumentContext, name: &str) -> Result<LevelInfo> {
    let levels = doc.levels();
    find_by_name(&levels, name, |_| true)
        .cloned()
        .ok_or_else(|| Error::NotFound {
            kind: LookupKind::Level,
            name: name.to_string(),
            family: None,
        })
}

/// Find a catalog type of `category` by display name and optional family.
pub fn resolve_type(
    doc: &dyn DocumentContext,
    category: Category,
    wanted: &CatalogName,
) -> Result<CatalogTypeInfo> {
    let types = doc.catalog_types(category);
    find_by_name(&types, &wanted.name, |ty| {
        wanted
            .family
            .as_deref()
            .map_or(true, |family| ty.family_name == family)
    })
    .cloned()
    .ok_or_else(|| Error::NotFound {
        kind: lookup_kind(category),
        name: wanted.name.clone(),
        family: wanted.family.clone(),
    })
}

fn lookup_kind(category: Category) -> LookupKind {
    match category {
        Category::Walls => LookupKind::WallType,
        Category::Doors => LookupKind::DoorType,
        Category::Windows => LookupKind::WindowType,
        Category::Roofs => LookupKind::RoofType,
    }
}

/// Levels and catalog types used by one generation run.
#[derive(Debug, Clone)]
pub struct ResolvedCatalog {
    pub base_level: LevelInfo,
    pub roof_level: LevelInfo,
    pub wall_type: CatalogTypeInfo,
    pub door_type: CatalogTypeInfo,
    pub window_type: CatalogTypeInfo,
    pub roof_type: CatalogTypeInfo,
}

impl ResolvedCatalog {
    /// Resolve every name in `config`, failing on the first miss.
    pub fn resolve(doc: &dyn DocumentContext, config: &GenerationConfig) -> Result<Self> {
        let resolved = Self {
            base_level: resolve_level(doc, &config.base_level)?,
            roof_level: resolve_level(doc, &config.roof_level)?,
            wall_type: resolve_type(doc, Category::Walls, &config.wall_type)?,
            door_type: resolve_type(doc, Category::Doors, &config.door_type)?,
            window_type: resolve_type(doc, Category::Windows, &config.window_type)?,
            roof_type: resolve_type(doc, Category::Roofs, &config.roof_type)?,
        };
        tracing::debug!(
            base_level = %resolved.base_level.name,
            roof_level = %resolved.roof_level.name,
            "Resolved levels and catalog types"
        );
        Ok(resolved)
    }

    pub fn base_level_id(&self) -> ElementId {
        self.base_level.id
    }

    pub fn roof_level_id(&self) -> ElementId {
        self.roof_level.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use house_lite_core::Parameters;
    use house_lite_document::MemoryDocument;

    fn document() -> MemoryDocument {
        let mut doc = MemoryDocument::new();
        doc.add_level("Level 1", 0.0);
        doc.add_level("Level 1", 5.0);
        doc.add_catalog_type("0915 x 2134mm", "Double-Glass", Category::Doors, Parameters::default(), false);
        doc.add_catalog_type("0915 x 2134mm", "Single-Flush", Category::Doors, Parameters::default(), false);
        doc
    }

    #[test]
    fn first_match_wins() {
        let doc = document();
        let level = resolve_level(&doc, "Level 1").unwrap();
        assert_eq!(level.elevation, 0.0);
    }

    #[test]
    fn family_narrows_the_match() {
        let doc = document();
        let any = resolve_type(&doc, Category::Doors, &CatalogName::new("0915 x 2134mm")).unwrap();
        assert_eq!(any.family_name, "Double-Glass");

        let single = resolve_type(
            &doc,
            Category::Doors,
            &CatalogName::in_family("0915 x 2134mm", "Single-Flush"),
        )
        .unwrap();
        assert_eq!(single.family_name, "Single-Flush");
    }

    #[test]
    fn misses_are_reported() {
        let doc = document();
        assert!(matches!(
            resolve_level(&doc, "Level 3"),
            Err(Error::NotFound { kind: LookupKind::Level, .. })
        ));
        // Same name in another category does not match
        assert!(matches!(
            resolve_type(&doc, Category::Windows, &CatalogName::new("0915 x 2134mm")),
            Err(Error::NotFound { kind: LookupKind::WindowType, .. })
        ));
        assert!(matches!(
            resolve_type(&doc, Category::Doors, &CatalogName::in_family("0915 x 2134mm", "Sliding")),
            Err(Error::NotFound { kind: LookupKind::DoorType, family: Some(_), .. })
        ));
    }

    #[test]
    fn find_by_name_applies_predicate() {
        let doc = document();
        let levels = doc.levels();
        let high = find_by_name(&levels, "Level 1", |l| l.elevation > 1.0).unwrap();
        assert_eq!(high.elevation, 5.0);
        assert!(find_by_name(&levels, "Roof", |_| true).is_none());
    }
}
