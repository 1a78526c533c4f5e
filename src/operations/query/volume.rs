use crate::error::RegistryError;
use crate::math::polygon_2d::signed_area_2d;
use crate::registry::{SolidId, VolumeRegistry};

/// Computes the volume of a registered extruded solid.
///
/// Only straight prisms are produced by this crate, so the volume is the
/// footprint area times the distance between the end planes.
pub struct PrismVolume {
    solid: SolidId,
}

impl PrismVolume {
    /// Creates a new `PrismVolume` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the volume (absolute value).
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is not in the registry.
    pub fn execute(&self, registry: &VolumeRegistry) -> Result<f64, RegistryError> {
        let shape = &registry.solid(self.solid)?.shape;
        Ok(signed_area_2d(&shape.vertices).abs() * shape.thickness().abs())
    }
}
