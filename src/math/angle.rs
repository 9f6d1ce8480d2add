use std::f64::consts::PI;

/// Converts radians to degrees.
#[must_use]
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Converts degrees to radians.
#[must_use]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Interprets a requested rotation angle as degrees.
///
/// Magnitudes up to `2π` are treated as radians and converted; anything
/// larger is assumed to already be in degrees. Positive angles rotate
/// counter-clockwise throughout the crate.
#[must_use]
pub fn rotation_degrees(angle: f64) -> f64 {
    if angle.abs() <= 2.0 * PI {
        to_degrees(angle)
    } else {
        angle
    }
}
