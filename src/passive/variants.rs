use tracing::debug;

use super::describe_shape;
use super::diagnostics::DiagnosticLog;
use crate::config::{ModuleConfig, PartialSpec, PlacementSpec};
use crate::error::Result;
use crate::geometry::{CrossSection, CrossSectionProvider};
use crate::operations::shaping::ExtrudePolygon;
use crate::registry::{Namespace, SolidId, VolumeId, VolumeRegistry};

/// One truncation type combined with one placement orientation.
#[derive(Debug, Clone, Copy)]
pub struct Variant<'a> {
    pub partial: &'a PartialSpec,
    pub placement: &'a PlacementSpec,
}

impl Variant<'_> {
    /// Unqualified mother volume name: parent, placement tag, partial tag.
    #[must_use]
    pub fn name(&self, parent: &str) -> String {
        format!("{parent}{}{}", self.placement.tag, self.partial.tag)
    }
}

/// Iterates over every variant, truncation types outermost.
pub fn variants(config: &ModuleConfig) -> impl Iterator<Item = Variant<'_>> {
    config.partials.iter().flat_map(move |partial| {
        config
            .placements
            .iter()
            .map(move |placement| Variant { partial, placement })
    })
}

/// The registered outer volume of one variant.
#[derive(Debug, Clone)]
pub(crate) struct Mother {
    pub(crate) name: String,
    pub(crate) solid: SolidId,
    pub(crate) volume: VolumeId,
    pub(crate) section: CrossSection,
}

/// Fetches the variant outline and registers the full-thickness mother volume.
pub(crate) fn build_mother(
    config: &ModuleConfig,
    namespace: &Namespace,
    variant: Variant<'_>,
    provider: &dyn CrossSectionProvider,
    registry: &mut VolumeRegistry,
    log: &mut DiagnosticLog<'_>,
) -> Result<Mother> {
    let section = CrossSection::from_provider(
        provider,
        variant.partial.partial_type,
        variant.placement.index,
        config.outline_size(),
    )?;

    let name = namespace.prepend(&variant.name(&config.parent_name));
    let extrude = ExtrudePolygon::new(&section, 0.5 * config.thickness);
    let solid = extrude.execute(registry, &name)?;
    let material = registry.material_by_name(&config.material)?;
    let volume = registry.register_volume(&name, solid, material)?;

    debug!(mother = %name, edges = section.vertex_count(), "registered mother volume");
    log.verbose(|| {
        let mut message = format!(
            "{name} extruded polygon made of {} {}",
            config.material,
            describe_shape(&extrude.shape())
        );
        for (i, v) in section.vertices().iter().enumerate() {
            message.push_str(&format!("\n[{i}] {}:{}", v.x, v.y));
        }
        message
    });

    Ok(Mother {
        name,
        solid,
        volume,
        section,
    })
}
