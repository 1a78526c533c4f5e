use crate::error::GeometryError;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::{Point2, Point3};

/// Source of wafer outlines for a given truncation type and placement.
///
/// Implementations must be pure: the same arguments always yield the same
/// boundary. The returned boundary is closed, i.e. its last point repeats the
/// first one.
pub trait CrossSectionProvider {
    /// Returns the ordered outline of a wafer of flat-to-flat `size`
    /// centred on `origin`.
    fn boundary(&self, partial_type: i32, placement_index: i32, size: f64, origin: Point3) -> Vec<Point2>;
}

impl<F> CrossSectionProvider for F
where
    F: Fn(i32, i32, f64, Point3) -> Vec<Point2>,
{
    fn boundary(&self, partial_type: i32, placement_index: i32, size: f64, origin: Point3) -> Vec<Point2> {
        self(partial_type, placement_index, size, origin)
    }
}

/// Footprint polygon shared by a mother volume and all of its layers.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSection {
    vertices: Vec<Point2>,
}

impl CrossSection {
    /// Creates a cross-section from an open polygon.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewVertices`] if fewer than 3 vertices are given.
    pub fn new(vertices: Vec<Point2>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices(vertices.len()));
        }
        Ok(Self { vertices })
    }

    /// Creates a cross-section from a closed provider boundary, dropping the
    /// trailing closing point.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewVertices`] if fewer than 3 vertices remain.
    pub fn from_boundary(mut boundary: Vec<Point2>) -> Result<Self, GeometryError> {
        boundary.pop();
        Self::new(boundary)
    }

    /// Queries `provider` for the outline of one wafer variant centred on the origin.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewVertices`] if the provider outline is degenerate.
    pub fn from_provider(
        provider: &dyn CrossSectionProvider,
        partial_type: i32,
        placement_index: i32,
        size: f64,
    ) -> Result<Self, GeometryError> {
        Self::from_boundary(provider.boundary(partial_type, placement_index, size, Point3::origin()))
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Unsigned area enclosed by the footprint.
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area_2d(&self.vertices).abs()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn closed_square() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(0.0, 0.0)]
    }

    #[test]
    fn closing_point_is_dropped() {
        let section = CrossSection::from_boundary(closed_square()).unwrap();
        assert_eq!(section.vertex_count(), 4);
        assert_eq!(section.vertices(), &closed_square()[..4]);
    }

    #[test]
    fn degenerate_boundary_is_rejected() {
        let err = CrossSection::from_boundary(vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 0.0)]).unwrap_err();
        assert!(matches!(err, GeometryError::TooFewVertices(2)));
    }

    #[test]
    fn closure_acts_as_provider() {
        let provider = |_: i32, _: i32, size: f64, _: Point3| {
            vec![p(0.0, 0.0), p(size, 0.0), p(size, size), p(0.0, size), p(0.0, 0.0)]
        };
        let section = CrossSection::from_provider(&provider, 0, 0, 3.0).unwrap();
        assert_relative_eq!(section.area(), 9.0);
    }
}
