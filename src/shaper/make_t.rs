use crate::error::Result;
use crate::math::Point2;

use super::{check_arm, check_extent};

/// T outline: a bar across the north side with a centered stem.
///
/// `x_width` is the stem width, `y_depth` the bar depth. Eight vertices,
/// counter-clockwise from the stem's south-west corner.
///
/// # Errors
///
/// Returns a `ShapeError` when an extent is not positive or an arm
/// meets or exceeds its overall extent.
pub fn make_t(
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
    let stem_west = origin.x + (x_size - x_width) * 0.5;
    let stem_east = stem_west + x_width;
    let bar_south = origin.y + y_size - y_depth;
    Ok(vec![
        Point2::new(stem_west, origin.y),
        Point2::new(stem_east, origin.y),
        Point2::new(stem_east, bar_south),
        Point2::new(origin.x + x_size, bar_south),
        Point2::new(origin.x + x_size, origin.y + y_size),
        Point2::new(origin.x, origin.y + y_size),
        Point2::new(origin.x, bar_south),
        Point2::new(stem_west, bar_south),
    ])
}
