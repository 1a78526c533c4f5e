use super::material::MaterialId;
use super::solid::SolidId;

slotmap::new_key_type! {
    /// Unique identifier for a logical volume in the volume registry.
    pub struct VolumeId;
}

/// A solid bound to a material.
#[derive(Debug, Clone)]
pub struct VolumeData {
    /// Qualified volume name.
    pub name: String,
    /// The solid giving the volume its shape.
    pub solid: SolidId,
    /// The material filling the volume.
    pub material: MaterialId,
}
