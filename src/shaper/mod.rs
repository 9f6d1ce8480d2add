//! Parametric shape factory.
//!
//! Each generator takes an origin and overall extents plus arm
//! width/depth parameters and returns the counter-clockwise vertex
//! sequence of a rectilinear outline, without a repeated closing vertex.
//! A requested arm that meets or exceeds its overall extent is an error;
//! a degenerate or self-intersecting outline is never returned.

mod make_box;
mod make_cross;
mod make_h;
mod make_l;
mod make_t;
mod make_u;

pub use make_box::make_box;
pub use make_cross::make_cross;
pub use make_h::make_h;
pub use make_l::make_l;
pub use make_t::make_t;
pub use make_u::make_u;

use crate::error::{Result, ShapeError};

/// Rejects non-positive overall extents.
pub(crate) fn check_extent(parameter: &'static str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ShapeError::NonPositiveExtent { parameter, value }.into())
    }
}

/// Rejects arm widths/depths that meet or exceed the available extent.
pub(crate) fn check_arm(parameter: &'static str, value: f64, extent: f64) -> Result<()> {
    if value <= 0.0 {
        return Err(ShapeError::NonPositiveExtent { parameter, value }.into());
    }
    if value >= extent {
        return Err(ShapeError::ArmExceedsExtent {
            parameter,
            value,
            extent,
        }
        .into());
    }
    Ok(())
}
