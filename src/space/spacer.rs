use super::Space;

/// Axis selector for tiled placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Deep-copies a space and shifts the copy.
///
/// Boundary, height, level and name are all carried over.
#[must_use]
pub fn copy_offset(space: &Space, dx: f64, dy: f64) -> Space {
    let mut copy = space.clone();
    copy.move_by(dx, dy);
    copy
}

/// Tiles additional copies of a template along an axis.
///
/// Returns `count` new spaces; the i-th copy is offset by
/// `(i + 1) * step` so the template itself keeps the first cell.
#[must_use]
pub fn place_row(template: &Space, count: usize, axis: Axis, step: f64) -> Vec<Space> {
    (1..=count)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let offset = i as f64 * step;
            match axis {
                Axis::X => copy_offset(template, offset, 0.0),
                Axis::Y => copy_offset(template, 0.0, offset),
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use approx::assert_relative_eq;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Vec<Point2> {
        vec![
            Point2::new(x, y),
            Point2::new(x + w, y),
            Point2::new(x + w, y + h),
            Point2::new(x, y + h),
        ]
    }

    #[test]
    fn copy_is_deep_and_offset() {
        let mut original = Space::from_boundary(rect(0.0, 0.0, 4.0, 2.0)).unwrap();
        original.set_name("Office");
        original.set_level(2.0);

        let copy = copy_offset(&original, 10.0, 0.0);
        assert_eq!(copy.name(), Some("Office"));
        assert_relative_eq!(copy.level(), 2.0);
        assert_relative_eq!(copy.bounds().unwrap().sw.x, 10.0);
        // The original is untouched.
        assert_relative_eq!(original.bounds().unwrap().sw.x, 0.0);
    }

    #[test]
    fn row_tiles_from_the_second_cell() {
        let template = Space::from_boundary(rect(0.0, 0.0, 3.0, 5.0)).unwrap();
        let row = place_row(&template, 3, Axis::Y, 5.0);
        assert_eq!(row.len(), 3);
        for (i, space) in row.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let expected = (i + 1) as f64 * 5.0;
            assert_relative_eq!(space.bounds().unwrap().sw.y, expected);
        }
    }

    #[test]
    fn zero_count_yields_no_copies() {
        let template = Space::from_boundary(rect(0.0, 0.0, 3.0, 5.0)).unwrap();
        assert!(place_row(&template, 0, Axis::X, 3.0).is_empty());
    }
}
