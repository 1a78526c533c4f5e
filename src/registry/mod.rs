pub mod material;
pub mod placement;
pub mod solid;
pub mod volume;

pub use material::{MaterialData, MaterialId};
pub use placement::{PlacementData, PlacementId};
pub use solid::{SolidData, SolidId};
pub use volume::{VolumeData, VolumeId};

use std::collections::{HashMap, HashSet};

use slotmap::SlotMap;

use crate::error::RegistryError;
use crate::geometry::ExtrudedPolygon;
use crate::math::Vector3;

/// Prefix that qualifies registered names, e.g. `hgcal:` in `hgcal:Passive`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Namespace {
    name: String,
}

impl Namespace {
    /// Creates a namespace. An empty name leaves names unqualified.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Qualifies `name` with this namespace unless it already carries one.
    #[must_use]
    pub fn prepend(&self, name: &str) -> String {
        if self.name.is_empty() || name.contains(':') {
            name.to_owned()
        } else {
            format!("{}:{name}", self.name)
        }
    }
}

/// Process-scoped store of every named solid, volume and placement of a
/// geometry build.
///
/// Entities reference each other via typed IDs (generational indices). Names
/// are unique per entity kind: registering a name twice is accepted only when
/// the definition is identical, in which case the existing ID is returned.
/// Nothing is ever removed, so iteration follows registration order.
#[derive(Debug, Default)]
pub struct VolumeRegistry {
    materials: SlotMap<MaterialId, MaterialData>,
    solids: SlotMap<SolidId, SolidData>,
    volumes: SlotMap<VolumeId, VolumeData>,
    placements: SlotMap<PlacementId, PlacementData>,
    material_names: HashMap<String, MaterialId>,
    solid_names: HashMap<String, SolidId>,
    volume_names: HashMap<String, VolumeId>,
    placed_copies: HashSet<(VolumeId, VolumeId, u32)>,
}

impl VolumeRegistry {
    /// Creates a new, empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the given materials already defined.
    #[must_use]
    pub fn with_materials<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for name in names {
            registry.add_material(name);
        }
        registry
    }

    // --- Material operations ---

    /// Defines a material, returning the existing ID if it is already known.
    pub fn add_material(&mut self, name: impl Into<String>) -> MaterialId {
        let name = name.into();
        if let Some(&id) = self.material_names.get(&name) {
            return id;
        }
        let id = self.materials.insert(MaterialData { name: name.clone() });
        self.material_names.insert(name, id);
        id
    }

    /// Looks up a material by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownMaterial`] if no such material is defined.
    pub fn material_by_name(&self, name: &str) -> Result<MaterialId, RegistryError> {
        self.material_names
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::UnknownMaterial(name.to_owned()))
    }

    /// Returns a reference to the material data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the registry.
    pub fn material(&self, id: MaterialId) -> Result<&MaterialData, RegistryError> {
        self.materials
            .get(id)
            .ok_or(RegistryError::EntityNotFound("material"))
    }

    // --- Solid operations ---

    /// Registers a solid under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NameCollision`] if `name` is already bound to a
    /// different shape.
    pub fn register_solid(&mut self, name: &str, shape: ExtrudedPolygon) -> Result<SolidId, RegistryError> {
        if let Some(&id) = self.solid_names.get(name) {
            if self.solids[id].shape == shape {
                return Ok(id);
            }
            return Err(RegistryError::NameCollision {
                kind: "solid",
                name: name.to_owned(),
            });
        }
        let id = self.solids.insert(SolidData {
            name: name.to_owned(),
            shape,
        });
        self.solid_names.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Returns a reference to the solid data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the registry.
    pub fn solid(&self, id: SolidId) -> Result<&SolidData, RegistryError> {
        self.solids.get(id).ok_or(RegistryError::EntityNotFound("solid"))
    }

    /// Looks up a solid by its qualified name.
    #[must_use]
    pub fn solid_by_name(&self, name: &str) -> Option<SolidId> {
        self.solid_names.get(name).copied()
    }

    /// Number of registered solids.
    #[must_use]
    pub fn solid_count(&self) -> usize {
        self.solids.len()
    }

    // --- Volume operations ---

    /// Registers a volume under `name`, binding `solid` to `material`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EntityNotFound`] if the solid or material is
    /// unknown, or [`RegistryError::NameCollision`] if `name` is already bound
    /// to a different solid/material pair.
    pub fn register_volume(
        &mut self,
        name: &str,
        solid: SolidId,
        material: MaterialId,
    ) -> Result<VolumeId, RegistryError> {
        self.solid(solid)?;
        self.material(material)?;
        if let Some(&id) = self.volume_names.get(name) {
            let existing = &self.volumes[id];
            if existing.solid == solid && existing.material == material {
                return Ok(id);
            }
            return Err(RegistryError::NameCollision {
                kind: "volume",
                name: name.to_owned(),
            });
        }
        let id = self.volumes.insert(VolumeData {
            name: name.to_owned(),
            solid,
            material,
        });
        self.volume_names.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Returns a reference to the volume data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the registry.
    pub fn volume(&self, id: VolumeId) -> Result<&VolumeData, RegistryError> {
        self.volumes.get(id).ok_or(RegistryError::EntityNotFound("volume"))
    }

    /// Looks up a volume by its qualified name.
    #[must_use]
    pub fn volume_by_name(&self, name: &str) -> Option<VolumeId> {
        self.volume_names.get(name).copied()
    }

    /// Iterates over all volumes in registration order.
    pub fn volumes(&self) -> impl Iterator<Item = (VolumeId, &VolumeData)> {
        self.volumes.iter()
    }

    /// Number of registered volumes.
    #[must_use]
    pub fn volume_count(&self) -> usize {
        self.volumes.len()
    }

    // --- Placement operations ---

    /// Places `child` inside `parent` at `translation` with the given copy number.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EntityNotFound`] for unknown volumes,
    /// [`RegistryError::SelfPlacement`] if `parent == child`, and
    /// [`RegistryError::DuplicatePlacement`] if the copy number is already used
    /// for this parent/child pair.
    pub fn place(
        &mut self,
        parent: VolumeId,
        child: VolumeId,
        copy_number: u32,
        translation: Vector3,
    ) -> Result<PlacementId, RegistryError> {
        let parent_name = &self.volume(parent)?.name;
        let child_name = &self.volume(child)?.name;
        if parent == child {
            return Err(RegistryError::SelfPlacement(parent_name.clone()));
        }
        if self.placed_copies.contains(&(parent, child, copy_number)) {
            return Err(RegistryError::DuplicatePlacement {
                parent: parent_name.clone(),
                child: child_name.clone(),
                copy_number,
            });
        }
        self.placed_copies.insert((parent, child, copy_number));
        Ok(self.placements.insert(PlacementData {
            parent,
            child,
            copy_number,
            translation,
        }))
    }

    /// Returns a reference to the placement data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the registry.
    pub fn placement(&self, id: PlacementId) -> Result<&PlacementData, RegistryError> {
        self.placements
            .get(id)
            .ok_or(RegistryError::EntityNotFound("placement"))
    }

    /// Iterates over the placements inside `parent` in placement order.
    pub fn placements_in(&self, parent: VolumeId) -> impl Iterator<Item = &PlacementData> {
        self.placements.values().filter(move |p| p.parent == parent)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{CrossSection, ZSection};
    use crate::math::Point2;

    fn slab(half: f64) -> ExtrudedPolygon {
        let section = CrossSection::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ])
        .unwrap();
        ExtrudedPolygon {
            vertices: section.vertices().to_vec(),
            sections: [ZSection::flat(-half), ZSection::flat(half)],
        }
    }

    #[test]
    fn namespace_prepends_once() {
        let ns = Namespace::new("hgcal");
        assert_eq!(ns.prepend("Passive"), "hgcal:Passive");
        assert_eq!(ns.prepend("other:Passive"), "other:Passive");
        assert_eq!(Namespace::default().prepend("Passive"), "Passive");
    }

    #[test]
    fn material_lookup() {
        let mut registry = VolumeRegistry::with_materials(["Air"]);
        let air = registry.material_by_name("Air").unwrap();
        assert_eq!(registry.add_material("Air"), air);
        assert!(matches!(
            registry.material_by_name("Copper"),
            Err(RegistryError::UnknownMaterial(name)) if name == "Copper"
        ));
    }

    #[test]
    fn identical_solid_reuses_id() {
        let mut registry = VolumeRegistry::new();
        let a = registry.register_solid("s", slab(0.5)).unwrap();
        let b = registry.register_solid("s", slab(0.5)).unwrap();
        assert_eq!(a, b);
        assert_eq!(registry.solid_count(), 1);
    }

    #[test]
    fn conflicting_solid_is_rejected() {
        let mut registry = VolumeRegistry::new();
        registry.register_solid("s", slab(0.5)).unwrap();
        let err = registry.register_solid("s", slab(0.25)).unwrap_err();
        assert!(matches!(err, RegistryError::NameCollision { kind: "solid", .. }));
    }

    #[test]
    fn conflicting_volume_is_rejected() {
        let mut registry = VolumeRegistry::with_materials(["Air", "Copper"]);
        let air = registry.material_by_name("Air").unwrap();
        let copper = registry.material_by_name("Copper").unwrap();
        let solid = registry.register_solid("s", slab(0.5)).unwrap();
        let v = registry.register_volume("v", solid, air).unwrap();
        assert_eq!(registry.register_volume("v", solid, air).unwrap(), v);
        let err = registry.register_volume("v", solid, copper).unwrap_err();
        assert!(matches!(err, RegistryError::NameCollision { kind: "volume", .. }));
        assert_eq!(registry.volume_by_name("v"), Some(v));
    }

    #[test]
    fn placement_rules() {
        let mut registry = VolumeRegistry::with_materials(["Air"]);
        let air = registry.material_by_name("Air").unwrap();
        let outer = registry.register_solid("outer", slab(1.0)).unwrap();
        let inner = registry.register_solid("inner", slab(0.25)).unwrap();
        let mother = registry.register_volume("outer", outer, air).unwrap();
        let child = registry.register_volume("inner", inner, air).unwrap();

        registry.place(mother, child, 1, Vector3::new(0.0, 0.0, -0.5)).unwrap();
        registry.place(mother, child, 2, Vector3::new(0.0, 0.0, 0.5)).unwrap();

        assert!(matches!(
            registry.place(mother, child, 2, Vector3::zeros()),
            Err(RegistryError::DuplicatePlacement { copy_number: 2, .. })
        ));
        assert!(matches!(
            registry.place(mother, mother, 1, Vector3::zeros()),
            Err(RegistryError::SelfPlacement(_))
        ));

        let copies: Vec<u32> = registry.placements_in(mother).map(|p| p.copy_number).collect();
        assert_eq!(copies, vec![1, 2]);
        assert_eq!(registry.placements_in(child).count(), 0);
    }

    #[test]
    fn copy_numbers_are_scoped_to_parent_and_child() {
        let mut registry = VolumeRegistry::with_materials(["Air"]);
        let air = registry.material_by_name("Air").unwrap();
        let outer = registry.register_solid("outer", slab(1.0)).unwrap();
        let inner = registry.register_solid("inner", slab(0.1)).unwrap();
        let first = registry.register_volume("first", outer, air).unwrap();
        let second = registry.register_volume("second", outer, air).unwrap();
        let glue = registry.register_volume("glue", inner, air).unwrap();
        let base = registry.register_volume("base", inner, air).unwrap();

        for copy_number in 1..=100 {
            let z = f64::from(copy_number) * 0.01;
            registry.place(first, glue, copy_number, Vector3::new(0.0, 0.0, z)).unwrap();
        }
        registry.place(first, base, 1, Vector3::zeros()).unwrap();
        registry.place(second, glue, 1, Vector3::zeros()).unwrap();

        assert!(matches!(
            registry.place(first, glue, 57, Vector3::zeros()),
            Err(RegistryError::DuplicatePlacement { copy_number: 57, .. })
        ));
        assert_eq!(registry.placements_in(first).count(), 101);
        assert_eq!(registry.placements_in(second).count(), 1);
    }
}
