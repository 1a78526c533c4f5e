slotmap::new_key_type! {
    /// Unique identifier for a material in the volume registry.
    pub struct MaterialId;
}

/// A named material that volumes can be filled with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialData {
    /// Qualified material name.
    pub name: String,
}
