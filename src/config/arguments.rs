use serde::Deserialize;

use super::{LayerSpec, LayerTypeId, ModuleConfig, PartialSpec, PlacementSpec};
use crate::error::ConfigError;

/// Positional algorithm arguments, as read from the geometry description.
///
/// Lists are matched by position: `tags[k]` belongs to `partial_types[k]`,
/// `placement_index_tags[m]` to `placement_index[m]`, and the three layer
/// lists describe one catalogue entry per position.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlgorithmArguments {
    #[serde(default)]
    pub namespace: String,
    pub parent_name: String,
    pub module_material: String,
    pub module_thickness: f64,
    pub wafer_size: f64,
    pub sensor_separation: f64,
    pub tags: Vec<String>,
    pub partial_types: Vec<i32>,
    pub placement_index: Vec<i32>,
    pub placement_index_tags: Vec<String>,
    pub layer_names: Vec<String>,
    pub layer_materials: Vec<String>,
    pub layer_thickness: Vec<f64>,
    #[serde(default)]
    pub layer_type: Vec<i32>,
}

fn same_length(first: &'static str, a: usize, second: &'static str, b: usize) -> Result<(), ConfigError> {
    if a == b {
        Ok(())
    } else {
        Err(ConfigError::LengthMismatch {
            first,
            first_len: a,
            second,
            second_len: b,
        })
    }
}

impl AlgorithmArguments {
    /// Parses arguments from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed or misses a field.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks the positional lists against each other and bundles them into
    /// a [`ModuleConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LengthMismatch`] if paired lists differ in length
    /// and [`ConfigError::LayerTypeOutOfRange`] if the stacking order refers to
    /// a missing catalogue entry.
    pub fn into_config(self) -> Result<ModuleConfig, ConfigError> {
        same_length("Tags", self.tags.len(), "PartialTypes", self.partial_types.len())?;
        same_length(
            "PlacementIndexTags",
            self.placement_index_tags.len(),
            "PlacementIndex",
            self.placement_index.len(),
        )?;
        same_length("LayerNames", self.layer_names.len(), "LayerMaterials", self.layer_materials.len())?;
        same_length("LayerNames", self.layer_names.len(), "LayerThickness", self.layer_thickness.len())?;

        let catalogue = self.layer_names.len();
        let stack = self
            .layer_type
            .iter()
            .enumerate()
            .map(|(position, &value)| {
                usize::try_from(value)
                    .ok()
                    .filter(|&index| index < catalogue)
                    .map(LayerTypeId)
                    .ok_or(ConfigError::LayerTypeOutOfRange {
                        position,
                        value: i64::from(value),
                        catalogue,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let partials = self
            .tags
            .into_iter()
            .zip(self.partial_types)
            .map(|(tag, partial_type)| PartialSpec { tag, partial_type })
            .collect();
        let placements = self
            .placement_index_tags
            .into_iter()
            .zip(self.placement_index)
            .map(|(tag, index)| PlacementSpec { tag, index })
            .collect();
        let layers = self
            .layer_names
            .into_iter()
            .zip(self.layer_materials)
            .zip(self.layer_thickness)
            .map(|((name, material), thickness)| LayerSpec {
                name,
                material,
                thickness,
            })
            .collect();

        Ok(ModuleConfig {
            namespace: self.namespace,
            parent_name: self.parent_name,
            material: self.module_material,
            thickness: self.module_thickness,
            wafer_size: self.wafer_size,
            sensor_separation: self.sensor_separation,
            partials,
            placements,
            layers,
            stack,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLE: &str = r#"{
        "Namespace": "hgcal",
        "ParentName": "HGCalEEPassive",
        "ModuleMaterial": "Air",
        "ModuleThickness": 1.0,
        "WaferSize": 166.4408,
        "SensorSeparation": 1.0,
        "Tags": ["LD1", "LD2"],
        "PartialTypes": [11, 12],
        "PlacementIndex": [0, 6],
        "PlacementIndexTags": ["0", "6"],
        "LayerNames": ["Glue", "Kapton"],
        "LayerMaterials": ["Epoxy", "Kapton"],
        "LayerThickness": [0.4, 0.6],
        "LayerType": [0, 1]
    }"#;

    #[test]
    fn parses_positional_arguments() {
        let config = AlgorithmArguments::from_json(SAMPLE).unwrap().into_config().unwrap();
        assert_eq!(config.namespace, "hgcal");
        assert_eq!(config.partials[1], PartialSpec { tag: "LD2".into(), partial_type: 12 });
        assert_eq!(config.placements[1], PlacementSpec { tag: "6".into(), index: 6 });
        assert_eq!(config.layers[0].material, "Epoxy");
        assert_eq!(config.stack, vec![LayerTypeId(0), LayerTypeId(1)]);
        assert_relative_eq!(config.outline_size(), 167.4408, epsilon = 1e-9);
        assert_relative_eq!(config.stack_thickness(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn namespace_and_stack_are_optional() {
        let json = r#"{
            "ParentName": "Passive",
            "ModuleMaterial": "Air",
            "ModuleThickness": 1.0,
            "WaferSize": 10.0,
            "SensorSeparation": 0.0,
            "Tags": ["F"],
            "PartialTypes": [0],
            "PlacementIndex": [0],
            "PlacementIndexTags": ["0"],
            "LayerNames": [],
            "LayerMaterials": [],
            "LayerThickness": []
        }"#;
        let config = AlgorithmArguments::from_json(json).unwrap().into_config().unwrap();
        assert!(config.namespace.is_empty());
        assert!(config.layers.is_empty());
        assert!(config.stack.is_empty());
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let err = AlgorithmArguments::from_json(r#"{"ParentName": "x"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn mismatched_variant_lists_fail_fast() {
        let mut args = AlgorithmArguments::from_json(SAMPLE).unwrap();
        args.partial_types.pop();
        let err = args.into_config().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::LengthMismatch { first: "Tags", first_len: 2, second: "PartialTypes", second_len: 1 }
        ));

        let mut args = AlgorithmArguments::from_json(SAMPLE).unwrap();
        args.placement_index_tags.push("extra".into());
        assert!(matches!(args.into_config(), Err(ConfigError::LengthMismatch { .. })));
    }

    #[test]
    fn mismatched_layer_catalogue_fails_fast() {
        let mut args = AlgorithmArguments::from_json(SAMPLE).unwrap();
        args.layer_thickness.push(0.1);
        assert!(matches!(
            args.into_config(),
            Err(ConfigError::LengthMismatch { second: "LayerThickness", .. })
        ));
    }

    #[test]
    fn stack_index_outside_catalogue_fails_fast() {
        let mut args = AlgorithmArguments::from_json(SAMPLE).unwrap();
        args.layer_type = vec![0, 2];
        assert!(matches!(
            args.into_config(),
            Err(ConfigError::LayerTypeOutOfRange { position: 1, value: 2, catalogue: 2 })
        ));

        let mut args = AlgorithmArguments::from_json(SAMPLE).unwrap();
        args.layer_type = vec![-1];
        assert!(matches!(
            args.into_config(),
            Err(ConfigError::LayerTypeOutOfRange { position: 0, value: -1, .. })
        ));
    }
}
