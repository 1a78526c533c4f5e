use crate::geometry::ExtrudedPolygon;

slotmap::new_key_type! {
    /// Unique identifier for a solid in the volume registry.
    pub struct SolidId;
}

/// A named solid shape.
#[derive(Debug, Clone)]
pub struct SolidData {
    /// Qualified solid name.
    pub name: String,
    /// The prism describing the solid.
    pub shape: ExtrudedPolygon,
}
