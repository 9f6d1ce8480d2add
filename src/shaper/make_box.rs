use crate::error::Result;
use crate::math::Point2;

use super::check_extent;

/// Axis-aligned rectangle from its south-west corner.
///
/// # Errors
///
/// Returns `ShapeError::NonPositiveExtent` when either size is not
/// positive.
pub fn make_box(origin: Point2, x_size: f64, y_size: f64) -> Result<Vec<Point2>> {
    check_extent("x_size", x_size)?;
    check_extent("y_size", y_size)?;
    Ok(vec![
        origin,
        Point2::new(origin.x + x_size, origin.y),
        Point2::new(origin.x + x_size, origin.y + y_size),
        Point2::new(origin.x, origin.y + y_size),
    ])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::signed_area_2d;
    use approx::assert_relative_eq;

    #[test]
    fn four_ccw_vertices() {
        let points = make_box(Point2::new(2.0, 3.0), 10.0, 4.0).unwrap();
        assert_eq!(points.len(), 4);
        assert_relative_eq!(signed_area_2d(&points), 40.0);
        assert_relative_eq!(points[0].x, 2.0);
        assert_relative_eq!(points[2].x, 12.0);
        assert_relative_eq!(points[2].y, 7.0);
    }

    #[test]
    fn rejects_non_positive_sizes() {
        assert!(make_box(Point2::origin(), 0.0, 4.0).is_err());
        assert!(make_box(Point2::origin(), 4.0, -1.0).is_err());
    }
}
