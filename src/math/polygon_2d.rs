use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn ccw_square_has_positive_area() {
        let square = [p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)];
        assert!((signed_area_2d(&square) - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn cw_square_has_negative_area() {
        let square = [p(0.0, 0.0), p(0.0, 2.0), p(2.0, 2.0), p(2.0, 0.0)];
        assert!((signed_area_2d(&square) + 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn degenerate_input_has_zero_area() {
        assert!(signed_area_2d(&[p(0.0, 0.0), p(1.0, 1.0)]).abs() < TOLERANCE);
    }
}
