use crate::compass::CompassPoint;
use crate::math::Point2;

/// Axis-aligned bounding box with compass-named access to its corners
/// and edge points.
///
/// Derived from the min/max coordinates of a vertex set. Degenerate
/// input (collinear or single-point) collapses one or both extents to
/// zero; only an empty vertex set has no box at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsBox {
    /// South-west (min x, min y) corner.
    pub sw: Point2,
    /// South-east (max x, min y) corner.
    pub se: Point2,
    /// North-east (max x, max y) corner.
    pub ne: Point2,
    /// North-west (min x, max y) corner.
    pub nw: Point2,
}

impl BoundsBox {
    /// Computes the box of a vertex set, or `None` when it is empty.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let first = points.first()?;
        let mut min_x = first.x;
        let mut max_x = first.x;
        let mut min_y = first.y;
        let mut max_y = first.y;
        for point in &points[1..] {
            min_x = min_x.min(point.x);
            max_x = max_x.max(point.x);
            min_y = min_y.min(point.y);
            max_y = max_y.max(point.y);
        }
        Some(Self {
            sw: Point2::new(min_x, min_y),
            se: Point2::new(max_x, min_y),
            ne: Point2::new(max_x, max_y),
            nw: Point2::new(min_x, max_y),
        })
    }

    /// Horizontal extent.
    #[must_use]
    pub fn size_x(&self) -> f64 {
        self.se.x - self.sw.x
    }

    /// Vertical extent.
    #[must_use]
    pub fn size_y(&self) -> f64 {
        self.nw.y - self.sw.y
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.sw.x + self.se.x) * 0.5,
            (self.sw.y + self.nw.y) * 0.5,
        )
    }

    /// Midpoint of the north edge.
    #[must_use]
    pub fn north(&self) -> Point2 {
        self.point_at(CompassPoint::N)
    }

    /// Midpoint of the south edge.
    #[must_use]
    pub fn south(&self) -> Point2 {
        self.point_at(CompassPoint::S)
    }

    /// Midpoint of the east edge.
    #[must_use]
    pub fn east(&self) -> Point2 {
        self.point_at(CompassPoint::E)
    }

    /// Midpoint of the west edge.
    #[must_use]
    pub fn west(&self) -> Point2 {
        self.point_at(CompassPoint::W)
    }

    /// Perimeter point for any of the sixteen compass directions.
    ///
    /// Corners and edge midpoints for the principal directions; the
    /// intermediate directions sit at the quarter positions of their
    /// edge (e.g. NNE lies on the north edge, three quarters along x).
    #[must_use]
    pub fn point_at(&self, direction: CompassPoint) -> Point2 {
        let (u, v) = match direction {
            CompassPoint::N => (0.5, 1.0),
            CompassPoint::Nne => (0.75, 1.0),
            CompassPoint::Ne => (1.0, 1.0),
            CompassPoint::Ene => (1.0, 0.75),
            CompassPoint::E => (1.0, 0.5),
            CompassPoint::Ese => (1.0, 0.25),
            CompassPoint::Se => (1.0, 0.0),
            CompassPoint::Sse => (0.75, 0.0),
            CompassPoint::S => (0.5, 0.0),
            CompassPoint::Ssw => (0.25, 0.0),
            CompassPoint::Sw => (0.0, 0.0),
            CompassPoint::Wsw => (0.0, 0.25),
            CompassPoint::W => (0.0, 0.5),
            CompassPoint::Wnw => (0.0, 0.75),
            CompassPoint::Nw => (0.0, 1.0),
            CompassPoint::Nnw => (0.25, 1.0),
        };
        Point2::new(
            self.sw.x + self.size_x() * u,
            self.sw.y + self.size_y() * v,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn corners_from_unordered_points() {
        let bounds = BoundsBox::from_points(&[p(4.0, 1.0), p(0.0, 3.0), p(2.0, 0.0)]).unwrap();
        assert_relative_eq!(bounds.sw.x, 0.0);
        assert_relative_eq!(bounds.sw.y, 0.0);
        assert_relative_eq!(bounds.ne.x, 4.0);
        assert_relative_eq!(bounds.ne.y, 3.0);
        assert_relative_eq!(bounds.size_x(), 4.0);
        assert_relative_eq!(bounds.size_y(), 3.0);
    }

    #[test]
    fn empty_has_no_box() {
        assert!(BoundsBox::from_points(&[]).is_none());
    }

    #[test]
    fn degenerate_collapses_to_zero_extent() {
        let bounds = BoundsBox::from_points(&[p(1.0, 2.0), p(5.0, 2.0)]).unwrap();
        assert_relative_eq!(bounds.size_x(), 4.0);
        assert_relative_eq!(bounds.size_y(), 0.0);
    }

    #[test]
    fn edge_midpoints() {
        let bounds =
            BoundsBox::from_points(&[p(0.0, 0.0), p(8.0, 0.0), p(8.0, 4.0), p(0.0, 4.0)]).unwrap();
        assert_relative_eq!(bounds.north().x, 4.0);
        assert_relative_eq!(bounds.north().y, 4.0);
        assert_relative_eq!(bounds.south().y, 0.0);
        assert_relative_eq!(bounds.east().x, 8.0);
        assert_relative_eq!(bounds.west().y, 2.0);
        assert_relative_eq!(bounds.center().x, 4.0);
        assert_relative_eq!(bounds.center().y, 2.0);
    }

    #[test]
    fn all_sixteen_directions_lie_on_the_perimeter() {
        let bounds =
            BoundsBox::from_points(&[p(0.0, 0.0), p(8.0, 0.0), p(8.0, 4.0), p(0.0, 4.0)]).unwrap();
        for direction in CompassPoint::ALL {
            let point = bounds.point_at(direction);
            let on_x_edge = point.x.abs() < 1e-12 || (point.x - 8.0).abs() < 1e-12;
            let on_y_edge = point.y.abs() < 1e-12 || (point.y - 4.0).abs() < 1e-12;
            assert!(on_x_edge || on_y_edge, "{direction:?} is not on the perimeter");
        }
        assert_relative_eq!(bounds.point_at(CompassPoint::Nne).x, 6.0);
        assert_relative_eq!(bounds.point_at(CompassPoint::Wsw).y, 1.0);
    }
}
