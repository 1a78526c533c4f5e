use std::f64::consts::FRAC_PI_3;

use super::cross_section::CrossSectionProvider;
use crate::math::{Point2, Point3};

/// Number of distinct placement indices: six rotations, each optionally mirrored.
const PLACEMENTS: i32 = 12;

/// Outline provider for full (untruncated) hexagonal wafers.
///
/// The hexagon has corners on the ±y axis. Placement indices `0..6` rotate it
/// in 60° steps, `6..12` mirror it in x before rotating. The partial type is
/// ignored: truncated outlines come from a mask-aware provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexagonalWafer;

impl CrossSectionProvider for HexagonalWafer {
    fn boundary(&self, _partial_type: i32, placement_index: i32, size: f64, origin: Point3) -> Vec<Point2> {
        let placement = placement_index.rem_euclid(PLACEMENTS);
        let mirror = if placement >= 6 { -1.0 } else { 1.0 };
        let rotation = f64::from(placement % 6) * FRAC_PI_3;
        let (sin, cos) = rotation.sin_cos();

        let r = 0.5 * size;
        let big_r = size / 3.0_f64.sqrt();
        let corners = [
            (0.0, -big_r),
            (r, -0.5 * big_r),
            (r, 0.5 * big_r),
            (0.0, big_r),
            (-r, 0.5 * big_r),
            (-r, -0.5 * big_r),
        ];

        let mut outline: Vec<Point2> = corners
            .iter()
            .map(|&(x, y)| {
                let x = mirror * x;
                Point2::new(origin.x + x * cos - y * sin, origin.y + x * sin + y * cos)
            })
            .collect();
        outline.push(outline[0]);
        outline
    }
}
