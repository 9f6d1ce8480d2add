use crate::error::Result;
use crate::math::Point2;

use super::{check_arm, check_extent};

/// Cross outline: a full-height bar and a full-width bar, both centered.
///
/// `x_width` is the vertical bar's width, `y_depth` the horizontal
/// bar's depth. Twelve vertices, counter-clockwise from the vertical
/// bar's south-west corner.
///
/// # Errors
///
/// Returns a `ShapeError` when an extent is not positive or an arm
/// meets or exceeds its overall extent.
pub fn make_cross(
    origin: Point2,
    x_size: f64,
    y_size: f64,
    x_width: f64,
    y_depth: f64,
) -> Result<Vec<Point2>> {
    check_extent("x_size", x_size)?;
    check_extent("y_size", y_size)?;
    check_arm("x_width", x_width, x_size)?;
    check_arm("y_depth", y_depth, y_size)?;
    let bar_west = origin.x + (x_size - x_width) * 0.5;
    let bar_east = bar_west + x_width;
    let bar_south = origin.y + (y_size - y_depth) * 0.5;
    let bar_north = bar_south + y_depth;
    let east = origin.x + x_size;
    let north = origin.y + y_size;
    Ok(vec![
        Point2::new(bar_west, origin.y),
        Point2::new(bar_east, origin.y),
        Point2::new(bar_east, bar_south),
        Point2::new(east, bar_south),
        Point2::new(east, bar_north),
        Point2::new(bar_east, bar_north),
        Point2::new(bar_east, north),
        Point2::new(bar_west, north),
        Point2::new(bar_west, bar_north),
        Point2::new(origin.x, bar_north),
        Point2::new(origin.x, bar_south),
        Point2::new(bar_west, bar_south),
    ])
}
