use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use super::describe_shape;
use super::diagnostics::DiagnosticLog;
use super::variants::Mother;
use crate::config::{LayerTypeId, ModuleConfig};
use crate::error::Result;
use crate::math::Vector3;
use crate::operations::shaping::ExtrudePolygon;
use crate::registry::{Namespace, PlacementId, VolumeId, VolumeRegistry};

/// One layer volume positioned inside a mother volume.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLayer {
    /// Catalogue entry the layer was built from.
    pub layer: LayerTypeId,
    /// The shared layer volume of this type.
    pub volume: VolumeId,
    pub placement: PlacementId,
    pub copy_number: u32,
    /// Centre of the layer along the module depth axis.
    pub z: f64,
}

/// Layers placed inside one mother volume, bottom to top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerStack {
    pub placed: Vec<PlacedLayer>,
    /// Sum of the thicknesses of all placed layers.
    pub accumulated_thickness: f64,
}

/// Builds and places the layer volumes of a single mother volume.
///
/// Each layer type used by the stacking order gets one solid and one volume
/// per mother; repeated entries reuse that volume with increasing copy
/// numbers.
pub(crate) struct LayerStackComposer<'a> {
    config: &'a ModuleConfig,
    namespace: &'a Namespace,
    mother: &'a Mother,
    built: HashMap<LayerTypeId, VolumeId>,
    copies: HashMap<LayerTypeId, u32>,
}

impl<'a> LayerStackComposer<'a> {
    pub(crate) fn new(config: &'a ModuleConfig, namespace: &'a Namespace, mother: &'a Mother) -> Self {
        Self {
            config,
            namespace,
            mother,
            built: HashMap::new(),
            copies: HashMap::new(),
        }
    }

    /// Walks the stacking order from `-thickness/2` upwards.
    pub(crate) fn compose(mut self, registry: &mut VolumeRegistry, log: &mut DiagnosticLog<'_>) -> Result<LayerStack> {
        let mut stack = LayerStack::default();
        let mut cursor = -0.5 * self.config.thickness;

        for (position, &id) in self.config.stack.iter().enumerate() {
            let layer = self.config.layer(id);
            let volume = match self.built.entry(id) {
                Entry::Occupied(entry) => *entry.get(),
                Entry::Vacant(entry) => {
                    *entry.insert(build_layer(self.config, self.namespace, self.mother, id, position, registry, log)?)
                }
            };

            let copy_number = self.copies.entry(id).or_insert(1);
            let z = cursor + 0.5 * layer.thickness;
            let placement = registry.place(self.mother.volume, volume, *copy_number, Vector3::new(0.0, 0.0, z))?;
            log.verbose(|| {
                format!(
                    "{}{} number {} positioned in {} at (0, 0, {z}) with no rotation",
                    self.mother.name, layer.name, copy_number, self.mother.name
                )
            });

            stack.placed.push(PlacedLayer {
                layer: id,
                volume,
                placement,
                copy_number: *copy_number,
                z,
            });
            *copy_number += 1;
            cursor += layer.thickness;
            stack.accumulated_thickness += layer.thickness;
        }

        debug!(
            mother = %self.mother.name,
            layers = stack.placed.len(),
            thickness = stack.accumulated_thickness,
            "placed layer stack"
        );
        Ok(stack)
    }
}

/// Registers the solid and volume of one layer type for the current mother.
fn build_layer(
    config: &ModuleConfig,
    namespace: &Namespace,
    mother: &Mother,
    id: LayerTypeId,
    position: usize,
    registry: &mut VolumeRegistry,
    log: &mut DiagnosticLog<'_>,
) -> Result<VolumeId> {
    let layer = config.layer(id);
    let name = namespace.prepend(&format!("{}{}", mother.name, layer.name));
    let extrude = ExtrudePolygon::new(&mother.section, 0.5 * layer.thickness);
    let solid = extrude.execute(registry, &name)?;
    let material = registry.material_by_name(&layer.material)?;
    let volume = registry.register_volume(&name, solid, material)?;

    log.verbose(|| {
        format!(
            "layer {}:{position}: {name} extruded polygon made of {} {}",
            id.0,
            layer.material,
            describe_shape(&extrude.shape())
        )
    });
    Ok(volume)
}
