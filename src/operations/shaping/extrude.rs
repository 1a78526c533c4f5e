use tracing::trace;

use crate::error::RegistryError;
use crate::geometry::{CrossSection, ExtrudedPolygon, ZSection};
use crate::registry::{SolidId, VolumeRegistry};

/// Extrudes a cross-section symmetrically about `z = 0` into a straight prism.
pub struct ExtrudePolygon<'a> {
    section: &'a CrossSection,
    half_thickness: f64,
}

impl<'a> ExtrudePolygon<'a> {
    /// Creates a new `ExtrudePolygon` operation spanning `[-half_thickness, +half_thickness]`.
    #[must_use]
    pub fn new(section: &'a CrossSection, half_thickness: f64) -> Self {
        Self {
            section,
            half_thickness,
        }
    }

    /// Builds the prism descriptor: zero in-plane offset and unit scale at both ends.
    #[must_use]
    pub fn shape(&self) -> ExtrudedPolygon {
        ExtrudedPolygon {
            vertices: self.section.vertices().to_vec(),
            sections: [
                ZSection::flat(-self.half_thickness),
                ZSection::flat(self.half_thickness),
            ],
        }
    }

    /// Executes the extrusion, registering the solid under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NameCollision`] if `name` is already bound to a
    /// different solid.
    pub fn execute(&self, registry: &mut VolumeRegistry, name: &str) -> Result<SolidId, RegistryError> {
        let shape = self.shape();
        trace!(
            solid = name,
            z0 = shape.sections[0].z,
            z1 = shape.sections[1].z,
            edges = shape.vertices.len(),
            "extruded polygon"
        );
        registry.register_solid(name, shape)
    }
}
