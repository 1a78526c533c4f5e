//! Construction of the passive volumes of partial silicon modules.
//!
//! For every variant (truncation type × placement) a mother prism of the full
//! module thickness is extruded from the wafer outline, and the layer
//! catalogue is stacked inside it along z following the configured order.

mod algorithm;
mod diagnostics;
mod layers;
mod validate;
mod variants;

pub use algorithm::{algorithm, Status, ALGORITHM_NAME};
pub use diagnostics::{Diagnostic, Severity};
pub use layers::{LayerStack, PlacedLayer};
pub use validate::check_thickness;
pub use variants::{variants, Variant};

use tracing::{debug, info};

use crate::config::ModuleConfig;
use crate::error::Result;
use crate::geometry::{CrossSectionProvider, ExtrudedPolygon};
use crate::registry::{Namespace, SolidId, VolumeId, VolumeRegistry};
use diagnostics::DiagnosticLog;
use layers::LayerStackComposer;

/// Options controlling what the builder reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Record a [`Severity::Verbose`] diagnostic for every solid and placement.
    pub verbose: bool,
}

/// Outcome of building one variant.
#[derive(Debug, Clone)]
pub struct VariantReport {
    /// Qualified mother volume name.
    pub name: String,
    pub partial_type: i32,
    pub placement_index: i32,
    pub solid: SolidId,
    pub mother: VolumeId,
    pub layers: LayerStack,
}

/// Everything a build produced besides the registry entries themselves.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub variants: Vec<VariantReport>,
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildReport {
    /// Diagnostics at or above `severity`.
    pub fn at_least(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.severity >= severity)
    }

    /// Returns `true` if any variant overflowed its nominal thickness.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.at_least(Severity::Error).next().is_some()
    }

    /// Forwards every diagnostic to `tracing`.
    pub fn emit(&self) {
        for diagnostic in &self.diagnostics {
            diagnostic.emit();
        }
    }
}

/// Builds the mother and layer volumes of every variant into a registry.
pub struct PassivePartial<'a> {
    config: &'a ModuleConfig,
    options: BuildOptions,
}

impl<'a> PassivePartial<'a> {
    /// Creates a new `PassivePartial` operation with default options.
    #[must_use]
    pub fn new(config: &'a ModuleConfig) -> Self {
        Self {
            config,
            options: BuildOptions::default(),
        }
    }

    /// Sets custom build options.
    #[must_use]
    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the construction.
    ///
    /// Thickness mismatches are reported as diagnostics and never abort the
    /// build; entries registered before a failure stay in the registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the stacking order refers to a missing layer, a
    /// provider outline is degenerate, a material is undefined, or a name
    /// collides with an incompatible registry entry.
    pub fn execute(&self, registry: &mut VolumeRegistry, provider: &dyn CrossSectionProvider) -> Result<BuildReport> {
        let mut report = BuildReport::default();
        self.execute_into(registry, provider, &mut report)?;
        Ok(report)
    }

    /// Executes the construction, appending to `report` as each variant
    /// completes.
    ///
    /// On error, `report` keeps the variants and diagnostics produced before
    /// the failure.
    ///
    /// # Errors
    ///
    /// Same as [`Self::execute`]. The stacking order is checked before
    /// anything is registered.
    pub fn execute_into(
        &self,
        registry: &mut VolumeRegistry,
        provider: &dyn CrossSectionProvider,
        report: &mut BuildReport,
    ) -> Result<()> {
        let config = self.config;
        config.check_stack()?;
        let namespace = Namespace::new(config.namespace.as_str());
        let mut log = DiagnosticLog::new(self.options.verbose, &mut report.diagnostics);
        log.verbose(|| describe_config(config));

        for variant in variants(config) {
            let mother = variants::build_mother(config, &namespace, variant, provider, registry, &mut log)?;
            let layers = LayerStackComposer::new(config, &namespace, &mother).compose(registry, &mut log)?;

            if !config.stack.is_empty() {
                if let Some(diagnostic) = check_thickness(config.thickness, layers.accumulated_thickness) {
                    debug!(mother = %mother.name, %diagnostic, "thickness mismatch");
                    log.push(diagnostic);
                }
            }

            report.variants.push(VariantReport {
                name: mother.name,
                partial_type: variant.partial.partial_type,
                placement_index: variant.placement.index,
                solid: mother.solid,
                mother: mother.volume,
                layers,
            });
        }

        info!(
            parent = %config.parent_name,
            variants = report.variants.len(),
            "built passive partial modules"
        );
        Ok(())
    }
}

/// Formats both end planes as `z|x|y|s` tuples, followed by the edge count.
fn describe_shape(shape: &ExtrudedPolygon) -> String {
    let [lo, hi] = &shape.sections;
    format!(
        "z|x|y|s (0) {}:{}:{}:{} z|x|y|s (1) {}:{}:{}:{} and {} edges",
        lo.z,
        lo.offset.x,
        lo.offset.y,
        lo.scale,
        hi.z,
        hi.offset.x,
        hi.offset.y,
        hi.scale,
        shape.vertices.len()
    )
}

fn describe_config(config: &ModuleConfig) -> String {
    let mut message = format!(
        "module {} made of {} T {} wafer 2r {} half separation {}\n{} variations of wafer types",
        config.parent_name,
        config.material,
        config.thickness,
        config.wafer_size,
        config.sensor_separation,
        config.partials.len()
    );
    for (k, partial) in config.partials.iter().enumerate() {
        for placement in &config.placements {
            message.push_str(&format!(
                "\ntype[{k}] {} partial {} placement index {} tag {}",
                partial.tag, partial.partial_type, placement.index, placement.tag
            ));
        }
    }
    message.push_str(&format!("\n{} types of volumes", config.layers.len()));
    for (i, layer) in config.layers.iter().enumerate() {
        message.push_str(&format!(
            "\nvolume [{i}] {} of thickness {} filled with {}",
            layer.name, layer.thickness, layer.material
        ));
    }
    message.push_str(&format!("\nthere are {} blocks", config.stack.len()));
    for (l, id) in config.stack.iter().enumerate() {
        message.push_str(&format!(" [{l}] {}", id.0));
    }
    message
}
