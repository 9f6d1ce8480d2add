use crate::error::{Result, ShapeError};
use crate::math::Point2;

use super::{check_arm, check_extent};

/// U outline: two arms rising from a bar across the south side.
///
/// `x_width1` is the west arm's width, `x_width2` the east arm's,
/// `y_depth` the bar depth. Eight vertices, counter-clockwise from the
/// origin corner.
///
/// # Errors
///
/// Returns a `ShapeError` when an extent is not positive, an arm meets
/// or exceeds its overall extent, or the two arms together leave no gap.
pub fn make_u(
    origin: Point2,
    x_size: f64,
    y_size: f64,
    x_width1: f64,
    x_width2: f64,
    y_depth: f64,
) -> Result<Vec<Point2>> {
    check_extent("x_size", x_size)?;
    check_extent("y_size", y_size)?;
    check_arm("x_width1", x_width1, x_size)?;
    check_arm("x_width2", x_width2, x_size)?;
    check_arm("y_depth", y_depth, y_size)?;
    if x_width1 + x_width2 >= x_size {
        return Err(ShapeError::ArmExceedsExtent {
            parameter: "x_width1 + x_width2",
            value: x_width1 + x_width2,
            extent: x_size,
        }
        .into());
    }
    let east = origin.x + x_size;
    let north = origin.y + y_size;
    Ok(vec![
        origin,
        Point2::new(east, origin.y),
        Point2::new(east, north),
        Point2::new(east - x_width2, north),
        Point2::new(east - x_width2, origin.y + y_depth),
        Point2::new(origin.x + x_width1, origin.y + y_depth),
        Point2::new(origin.x + x_width1, north),
        Point2::new(origin.x, north),
    ])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::signed_area_2d;
    use approx::assert_relative_eq;

    #[test]
    fn eight_vertices_and_bar_plus_arms_area() {
        let points = make_u(Point2::origin(), 10.0, 8.0, 2.0, 3.0, 2.0).unwrap();
        assert_eq!(points.len(), 8);
        // Bar 10x2 plus arms 2x6 and 3x6.
        assert_relative_eq!(signed_area_2d(&points), 20.0 + 12.0 + 18.0);
    }

    #[test]
    fn touching_arms_are_rejected() {
        assert!(make_u(Point2::origin(), 10.0, 8.0, 5.0, 5.0, 2.0).is_err());
        assert!(make_u(Point2::origin(), 10.0, 8.0, 6.0, 5.0, 2.0).is_err());
    }
}
