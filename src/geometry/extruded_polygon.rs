use crate::math::{Point2, Vector2};

/// One end plane of an extruded polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZSection {
    /// Position of the plane along the extrusion axis.
    pub z: f64,
    /// In-plane shift of the footprint at this plane.
    pub offset: Vector2,
    /// Footprint scale factor at this plane.
    pub scale: f64,
}

impl ZSection {
    /// A plane at `z` with no shift and unit scale.
    #[must_use]
    pub fn flat(z: f64) -> Self {
        Self {
            z,
            offset: Vector2::zeros(),
            scale: 1.0,
        }
    }
}

/// A polygon swept between two parallel z-planes.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtrudedPolygon {
    /// Footprint vertices, open (no closing duplicate).
    pub vertices: Vec<Point2>,
    /// Lower and upper end planes.
    pub sections: [ZSection; 2],
}

impl ExtrudedPolygon {
    /// Distance between the two end planes.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.sections[1].z - self.sections[0].z
    }

    /// Returns `true` if both end planes carry the untransformed footprint.
    #[must_use]
    pub fn is_straight_prism(&self) -> bool {
        self.sections
            .iter()
            .all(|s| s.offset == Vector2::zeros() && (s.scale - 1.0).abs() < f64::EPSILON)
    }
}
