use crate::error::{Result, ShapeError};
use crate::math::Point2;

use super::{check_arm, check_extent};

/// H outline: two full-height bars joined by a centered crossbar.
///
/// `x_width1` is the west bar's width, `x_width2` the east bar's,
/// `y_depth` the crossbar depth. Twelve vertices, counter-clockwise
/// from the origin corner.
///
/// # Errors
///
/// Returns a `ShapeError` when an extent is not positive, an arm meets
/// or exceeds its overall extent, or the two bars together leave no gap.
pub fn make_h(
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
    let bar_west = origin.x + x_width1;
    let bar_east = east - x_width2;
    let cross_south = origin.y + (y_size - y_depth) * 0.5;
    let cross_north = cross_south + y_depth;
    Ok(vec![
        origin,
        Point2::new(bar_west, origin.y),
        Point2::new(bar_west, cross_south),
        Point2::new(bar_east, cross_south),
        Point2::new(bar_east, origin.y),
        Point2::new(east, origin.y),
        Point2::new(east, north),
        Point2::new(bar_east, north),
        Point2::new(bar_east, cross_north),
        Point2::new(bar_west, cross_north),
        Point2::new(bar_west, north),
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
    fn twelve_vertices_and_bars_plus_crossbar_area() {
        let points = make_h(Point2::origin(), 10.0, 8.0, 2.0, 2.0, 2.0).unwrap();
        assert_eq!(points.len(), 12);
        // Two 2x8 bars plus a 6x2 crossbar.
        assert_relative_eq!(signed_area_2d(&points), 16.0 + 16.0 + 12.0);
    }

    #[test]
    fn crossbar_is_centered_vertically() {
        let points = make_h(Point2::origin(), 10.0, 8.0, 2.0, 2.0, 2.0).unwrap();
        assert_relative_eq!(points[2].y, 3.0);
        assert_relative_eq!(points[8].y, 5.0);
    }

    #[test]
    fn touching_bars_are_rejected() {
        assert!(make_h(Point2::origin(), 10.0, 8.0, 5.0, 5.0, 2.0).is_err());
    }
}
