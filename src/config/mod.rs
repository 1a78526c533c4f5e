//! Validated description of a passive partial module.
//!
//! [`AlgorithmArguments`] mirrors the positional argument lists of the
//! geometry description; [`ModuleConfig`] is the checked form the builder
//! consumes, with each variant axis and each layer type bundled into its own
//! record.

mod arguments;

pub use arguments::AlgorithmArguments;

use crate::error::ConfigError;

/// Index into [`ModuleConfig::layers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerTypeId(pub usize);

/// One truncation type of the wafer outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialSpec {
    /// Suffix appended to the mother volume name.
    pub tag: String,
    /// Truncation type understood by the cross-section provider.
    pub partial_type: i32,
}

/// One placement orientation of the wafer outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementSpec {
    /// Infix inserted between the parent name and the partial tag.
    pub tag: String,
    /// Placement index understood by the cross-section provider.
    pub index: i32,
}

/// One entry of the layer catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSpec {
    pub name: String,
    pub material: String,
    pub thickness: f64,
}

/// Complete, validated parameter set for building the passive volumes.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleConfig {
    /// Namespace qualifying every registered name (may be empty).
    pub namespace: String,
    /// Prefix of every mother volume name.
    pub parent_name: String,
    /// Material filling the mother volumes.
    pub material: String,
    /// Nominal module thickness.
    pub thickness: f64,
    /// Flat-to-flat wafer size.
    pub wafer_size: f64,
    /// Gap between neighbouring sensors, added to the wafer size.
    pub sensor_separation: f64,
    pub partials: Vec<PartialSpec>,
    pub placements: Vec<PlacementSpec>,
    pub layers: Vec<LayerSpec>,
    /// Stacking order from `-thickness/2` upwards; entries may repeat.
    pub stack: Vec<LayerTypeId>,
}

impl ModuleConfig {
    /// Size passed to the cross-section provider.
    #[must_use]
    pub fn outline_size(&self) -> f64 {
        self.wafer_size + self.sensor_separation
    }

    /// Returns the catalogue entry for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not an index into [`Self::layers`]. IDs taken from
    /// [`Self::stack`] are valid once [`Self::check_stack`] has passed.
    #[must_use]
    pub fn layer(&self, id: LayerTypeId) -> &LayerSpec {
        &self.layers[id.0]
    }

    /// Checks that every stacking-order entry refers to a catalogue entry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LayerTypeOutOfRange`] for the first entry past
    /// the end of [`Self::layers`].
    pub fn check_stack(&self) -> Result<(), ConfigError> {
        let catalogue = self.layers.len();
        match self.stack.iter().position(|id| id.0 >= catalogue) {
            Some(position) => Err(ConfigError::LayerTypeOutOfRange {
                position,
                value: i64::try_from(self.stack[position].0).unwrap_or(i64::MAX),
                catalogue,
            }),
            None => Ok(()),
        }
    }

    /// Sum of the thicknesses of every entry in the stacking order.
    #[must_use]
    pub fn stack_thickness(&self) -> f64 {
        self.stack.iter().map(|&id| self.layer(id).thickness).sum()
    }
}
