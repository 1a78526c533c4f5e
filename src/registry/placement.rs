use crate::math::Vector3;

use super::volume::VolumeId;

slotmap::new_key_type! {
    /// Unique identifier for a placement in the volume registry.
    pub struct PlacementId;
}

/// A child volume positioned inside a parent volume, without rotation.
#[derive(Debug, Clone)]
pub struct PlacementData {
    /// The containing volume.
    pub parent: VolumeId,
    /// The placed volume.
    pub child: VolumeId,
    /// Instance counter of `child` inside `parent`, starting at 1.
    pub copy_number: u32,
    /// Offset of the child origin in the parent frame.
    pub translation: Vector3,
}
