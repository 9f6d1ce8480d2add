use crate::error::Result;
use crate::math::Point2;

use super::{check_arm, check_extent};

/// L outline: a vertical arm along the west side and a horizontal arm
/// along the south side.
///
/// `x_width` is the vertical arm's width, `y_depth` the horizontal
/// arm's depth. Six vertices, counter-clockwise from the origin corner.
///
/// # Errors
///
/// Returns a `ShapeError` when an extent is not positive or an arm
/// meets or exceeds its overall extent.
pub fn make_l(
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
    Ok(vec![
        origin,
        Point2::new(origin.x + x_size, origin.y),
        Point2::new(origin.x + x_size, origin.y + y_depth),
        Point2::new(origin.x + x_width, origin.y + y_depth),
        Point2::new(origin.x + x_width, origin.y + y_size),
        Point2::new(origin.x, origin.y + y_size),
    ])
}
