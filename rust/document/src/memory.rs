// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory host document.
//!
//! [`MemoryDocument`] owns every element in a slot map with stable,
//! generational keys plus a creation-order index, so name lookups return the
//! first match in document order the way a host's element collector does.
//!
//! ## Transactions
//!
//! Mutations are only accepted inside the single open transaction. Beginning
//! a transaction snapshots the arena; rollback restores that snapshot, so a
//! failed run leaves the document exactly as it was.
//!
//! ## Rejections
//!
//! A host can refuse any creation call. [`MemoryDocument::reject`] makes the
//! document refuse an operation on purpose, which lets callers exercise their
//! failure paths.

use house_lite_core::{
    CatalogTypeInfo, Category, ElementId, LevelInfo, ParamValue, ParameterKey, Parameters,
};
use house_lite_geometry::{ExtrusionBounds, PlanePlacement, Segment, TOLERANCE};
use nalgebra::Point3;
use rustc_hash::FxHashSet;
use slotmap::SlotMap;

use crate::context::{DocumentContext, WallInfo};
use crate::element::*;
use crate::error::{Error, Result};

/// Host operations that can be refused on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostOperation {
    ActivateType,
    CreateWall,
    CreateOpening,
    CreateReferencePlane,
    CreateExtrusionRoof,
}

impl HostOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            HostOperation::ActivateType => "type activation",
            HostOperation::CreateWall => "wall creation",
            HostOperation::CreateOpening => "opening creation",
            HostOperation::CreateReferencePlane => "reference plane creation",
            HostOperation::CreateExtrusionRoof => "extrusion roof creation",
        }
    }
}

/// State saved when a transaction begins.
#[derive(Debug)]
struct OpenTransaction {
    name: String,
    elements: SlotMap<ElementId, Element>,
    order: Vec<ElementId>,
}

/// A document held entirely in memory.
///
/// # Example
///
/// ```
/// use house_lite_core::Category;
/// use house_lite_document::{DocumentContext, MemoryDocument};
///
/// let mut doc = MemoryDocument::new();
/// doc.add_level("Level 1", 0.0);
/// doc.add_catalog_type("Fixed", "Windows", Category::Windows, Default::default(), false);
///
/// assert_eq!(doc.levels().len(), 1);
/// assert_eq!(doc.catalog_types(Category::Windows).len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryDocument {
    pub(crate) elements: SlotMap<ElementId, Element>,
    pub(crate) order: Vec<ElementId>,
    transaction: Option<OpenTransaction>,
    committed: Vec<String>,
    begun: usize,
    rejected: FxHashSet<HostOperation>,
}

impl MemoryDocument {
    /// Creates a new, empty document.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Template content ---

    /// Adds a level. Template content is accepted with or without a transaction.
    pub fn add_level(&mut self, name: &str, elevation: f64) -> ElementId {
        self.insert(name, ElementData::Level(LevelData { elevation }))
    }

    /// Adds a catalog type.
    pub fn add_catalog_type(
        &mut self,
        name: &str,
        family_name: &str,
        category: Category,
        parameters: Parameters,
        active: bool,
    ) -> ElementId {
        self.insert(
            name,
            ElementData::CatalogType(CatalogTypeData {
                family_name: family_name.to_string(),
                category,
                active,
                parameters,
            }),
        )
    }

    // --- Queries ---

    /// Returns the element for the given key, or `None` if not found.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Iterates elements in creation order.
    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.order
            .iter()
            .filter_map(move |id| self.elements.get(*id).map(|e| (*id, e)))
    }

    /// Returns the number of elements in the document.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements of one class.
    pub fn count(&self, class: ElementClass) -> usize {
        self.elements.values().filter(|e| e.class() == class).count()
    }

    /// Names of committed transactions, oldest first.
    pub fn committed_transactions(&self) -> &[String] {
        &self.committed
    }

    /// Number of transactions ever started, whatever their outcome.
    pub fn begun_transactions(&self) -> usize {
        self.begun
    }

    /// Makes the document refuse `op` until [`MemoryDocument::allow`] is called.
    pub fn reject(&mut self, op: HostOperation) {
        self.rejected.insert(op);
    }

    pub fn allow(&mut self, op: HostOperation) {
        self.rejected.remove(&op);
    }

    // --- Internals ---

    fn insert(&mut self, name: &str, data: ElementData) -> ElementId {
        let id = self.elements.insert(Element {
            name: name.to_string(),
            data,
        });
        self.order.push(id);
        id
    }

    fn get(&self, id: ElementId) -> Result<&Element> {
        self.elements.get(id).ok_or(Error::ElementNotFound(id))
    }

    fn wrong_class(id: ElementId, expected: ElementClass, found: &Element) -> Error {
        Error::WrongClass {
            id,
            expected,
            found: found.class(),
        }
    }

    fn level_data(&self, id: ElementId) -> Result<&LevelData> {
        let element = self.get(id)?;
        match &element.data {
            ElementData::Level(level) => Ok(level),
            _ => Err(Self::wrong_class(id, ElementClass::Level, element)),
        }
    }

    fn type_data(&self, id: ElementId) -> Result<(&str, &CatalogTypeData)> {
        let element = self.get(id)?;
        match &element.data {
            ElementData::CatalogType(ty) => Ok((&element.name, ty)),
            _ => Err(Self::wrong_class(id, ElementClass::CatalogType, element)),
        }
    }

    fn type_of_category(&self, id: ElementId, expected: Category) -> Result<(&str, &CatalogTypeData)> {
        let (name, ty) = self.type_data(id)?;
        if ty.category != expected {
            return Err(Error::WrongCategory {
                name: name.to_string(),
                expected,
                found: ty.category,
            });
        }
        Ok((name, ty))
    }

    fn wall_data(&self, id: ElementId) -> Result<&WallData> {
        let element = self.get(id)?;
        match &element.data {
            ElementData::Wall(wall) => Ok(wall),
            _ => Err(Self::wrong_class(id, ElementClass::Wall, element)),
        }
    }

    /// Checks that a mutation is allowed right now.
    fn check_mutation(&self, op: HostOperation) -> Result<()> {
        if self.transaction.is_none() {
            return Err(Error::NoTransaction);
        }
        if self.rejected.contains(&op) {
            return Err(Error::Rejected(op.as_str().to_string()));
        }
        Ok(())
    }

    fn type_info(id: ElementId, name: &str, ty: &CatalogTypeData) -> CatalogTypeInfo {
        CatalogTypeInfo {
            id,
            name: name.to_string(),
            family_name: ty.family_name.clone(),
            category: ty.category,
            active: ty.active,
            parameters: ty.parameters.clone(),
        }
    }
}

impl DocumentContext for MemoryDocument {
    fn levels(&self) -> Vec<LevelInfo> {
        self.elements()
            .filter_map(|(id, element)| match &element.data {
                ElementData::Level(level) => Some(LevelInfo {
                    id,
                    name: element.name.clone(),
                    elevation: level.elevation,
                }),
                _ => None,
            })
            .collect()
    }

    fn catalog_types(&self, category: Category) -> Vec<CatalogTypeInfo> {
        self.elements()
            .filter_map(|(id, element)| match &element.data {
                ElementData::CatalogType(ty) if ty.category == category => {
                    Some(Self::type_info(id, &element.name, ty))
                }
                _ => None,
            })
            .collect()
    }

    fn catalog_type(&self, id: ElementId) -> Result<CatalogTypeInfo> {
        let (name, ty) = self.type_data(id)?;
        Ok(Self::type_info(id, name, ty))
    }

    fn wall(&self, id: ElementId) -> Result<WallInfo> {
        let wall = self.wall_data(id)?;
        Ok(WallInfo {
            id,
            type_id: wall.type_id,
            level_id: wall.level_id,
            curve: wall.curve,
            width: wall.width,
            height: wall.height,
        })
    }

    fn find_inserts(&self, wall: ElementId) -> Result<Vec<ElementId>> {
        self.wall_data(wall)?;
        Ok(self
            .elements()
            .filter_map(|(id, element)| match &element.data {
                ElementData::FamilyInstance(instance) if instance.host == wall => Some(id),
                _ => None,
            })
            .collect())
    }

    fn activate_type(&mut self, type_id: ElementId) -> Result<()> {
        self.check_mutation(HostOperation::ActivateType)?;
        self.type_data(type_id)?;

        if let Some(Element {
            data: ElementData::CatalogType(ty),
            name,
        }) = self.elements.get_mut(type_id)
        {
            if !ty.active {
                ty.active = true;
                tracing::debug!(name = %name, "Activated type");
            }
        }
        Ok(())
    }

    fn create_wall(
        &mut self,
        curve: &Segment,
        wall_type: ElementId,
        level: ElementId,
        height: f64,
        structural: bool,
    ) -> Result<ElementId> {
        self.check_mutation(HostOperation::CreateWall)?;
        let (type_name, ty) = self.type_of_category(wall_type, Category::Walls)?;
        let width = ty
            .parameters
            .get(&ParameterKey::Width)
            .and_then(ParamValue::as_length)
            .ok_or_else(|| Error::MissingParameter {
                name: type_name.to_string(),
                parameter: ParameterKey::Width,
            })?;
        let type_name = type_name.to_string();
        self.level_data(level)?;

        if curve.is_degenerate() {
            return Err(Error::InvalidGeometry("wall curve has zero length".into()));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(Error::InvalidGeometry(format!("wall height {height} is not positive")));
        }

        let id = self.insert(
            &type_name,
            ElementData::Wall(WallData {
                type_id: wall_type,
                level_id: level,
                curve: *curve,
                height,
                width,
                structural,
            }),
        );
        tracing::debug!(?id, length = curve.length(), height, "Created wall");
        Ok(id)
    }

    fn create_opening(
        &mut self,
        point: &Point3<f64>,
        type_id: ElementId,
        host: ElementId,
        level: ElementId,
    ) -> Result<ElementId> {
        self.check_mutation(HostOperation::CreateOpening)?;
        let (type_name, ty) = self.type_data(type_id)?;
        if !ty.category.is_wall_hosted() {
            return Err(Error::NotWallHosted {
                name: type_name.to_string(),
                category: ty.category,
            });
        }
        if !ty.active {
            return Err(Error::InactiveType(type_name.to_string()));
        }
        let category = ty.category;
        let type_name = type_name.to_string();

        let wall = self.wall_data(host)?;
        self.level_data(level)?;

        let plan_distance = wall.curve.plan_distance_to(point);
        let base = wall.curve.start.z.min(wall.curve.end.z);
        let vertical_excess = if point.z < base {
            base - point.z
        } else {
            (point.z - (base + wall.height)).max(0.0)
        };
        let horizontal_excess = (plan_distance - wall.width / 2.0).max(0.0);
        let distance = horizontal_excess.hypot(vertical_excess);
        if distance.is_nan() || distance > TOLERANCE {
            return Err(Error::PointOffHost { host, distance });
        }

        let id = self.insert(
            &type_name,
            ElementData::FamilyInstance(FamilyInstanceData {
                category,
                type_id,
                host,
                level_id: level,
                location: *point,
            }),
        );
        tracing::debug!(?id, ?host, %category, "Placed opening");
        Ok(id)
    }

    fn create_reference_plane(&mut self, placement: &PlanePlacement) -> Result<ElementId> {
        self.check_mutation(HostOperation::CreateReferencePlane)?;
        placement
            .normal()
            .map_err(|e| Error::InvalidGeometry(format!("reference plane: {e}")))?;

        let id = self.insert("Reference Plane", ElementData::ReferencePlane(*placement));
        tracing::debug!(?id, "Created reference plane");
        Ok(id)
    }

    fn create_extrusion_roof(
        &mut self,
        profile: &[Segment],
        plane: ElementId,
        level: ElementId,
        roof_type: ElementId,
        bounds: ExtrusionBounds,
    ) -> Result<ElementId> {
        self.check_mutation(HostOperation::CreateExtrusionRoof)?;
        let (type_name, _) = self.type_of_category(roof_type, Category::Roofs)?;
        let type_name = type_name.to_string();
        self.level_data(level)?;

        let plane_element = self.get(plane)?;
        if !matches!(plane_element.data, ElementData::ReferencePlane(_)) {
            return Err(Self::wrong_class(plane, ElementClass::ReferencePlane, plane_element));
        }

        if profile.is_empty() {
            return Err(Error::InvalidGeometry("roof profile is empty".into()));
        }
        if profile.iter().any(Segment::is_degenerate) {
            return Err(Error::InvalidGeometry("roof profile has a zero-length segment".into()));
        }
        for (i, pair) in profile.windows(2).enumerate() {
            if (pair[0].end - pair[1].start).norm() > TOLERANCE {
                return Err(Error::InvalidGeometry(format!(
                    "roof profile segment {} does not meet segment {}",
                    i,
                    i + 1
                )));
            }
        }
        if !(bounds.end > bounds.start) {
            return Err(Error::InvalidGeometry(format!(
                "extrusion end {} must exceed start {}",
                bounds.end, bounds.start
            )));
        }

        let id = self.insert(
            &type_name,
            ElementData::ExtrusionRoof(ExtrusionRoofData {
                type_id: roof_type,
                level_id: level,
                plane,
                profile: profile.to_vec(),
                bounds,
            }),
        );
        tracing::debug!(?id, start = bounds.start, end = bounds.end, "Created extrusion roof");
        Ok(id)
    }

    fn begin_transaction(&mut self, name: &str) -> Result<()> {
        if let Some(open) = &self.transaction {
            return Err(Error::TransactionAlreadyOpen(open.name.clone()));
        }
        self.transaction = Some(OpenTransaction {
            name: name.to_string(),
            elements: self.elements.clone(),
            order: self.order.clone(),
        });
        self.begun += 1;
        tracing::debug!(name, "Transaction started");
        Ok(())
    }

    fn commit_transaction(&mut self) -> Result<()> {
        let open = self.transaction.take().ok_or(Error::NoTransaction)?;
        tracing::info!(name = %open.name, elements = self.elements.len(), "Transaction committed");
        self.committed.push(open.name);
        Ok(())
    }

    fn rollback_transaction(&mut self) -> Result<()> {
        let open = self.transaction.take().ok_or(Error::NoTransaction)?;
        self.elements = open.elements;
        self.order = open.order;
        tracing::warn!(name = %open.name, "Transaction rolled back");
        Ok(())
    }

    fn in_transaction(&self) -> bool {
        self.transaction.is_some()
    }
}
