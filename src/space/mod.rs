mod bounds;
mod group;
mod spacer;

pub use bounds::BoundsBox;
pub use group::SpaceGroup;
pub use spacer::{copy_offset, place_row, Axis};

use crate::error::{GeometryError, Result};
use crate::math::angle::to_radians;
use crate::math::polygon_2d::{point_in_polygon_2d, rotate_point_2d, signed_area_2d};
use crate::math::union_2d::boundary_union_2d;
use crate::math::{Point2, Point3, TOLERANCE};

/// A named, leveled, height-bearing polygon container.
///
/// The atomic spatial unit of the kernel: a room, a corridor, or a whole
/// floor outline. A space starts empty; derived views (area, bounds,
/// center) are undefined until a boundary is assigned, and every derived
/// view is recomputed from the current boundary on access.
#[derive(Debug, Clone, PartialEq)]
pub struct Space {
    boundary: Vec<Point2>,
    height: f64,
    level: f64,
    name: Option<String>,
}

impl Default for Space {
    fn default() -> Self {
        Self {
            boundary: Vec::new(),
            height: 1.0,
            level: 0.0,
            name: None,
        }
    }
}

impl Space {
    /// Creates an empty space with unit height at level zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a space from a boundary polygon.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` for fewer than three vertices.
    pub fn from_boundary(points: Vec<Point2>) -> Result<Self> {
        let mut space = Self::new();
        space.set_boundary(points)?;
        Ok(space)
    }

    /// Replaces the boundary polygon wholesale.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` for fewer than three vertices;
    /// the existing boundary is left untouched in that case.
    pub fn set_boundary(&mut self, points: Vec<Point2>) -> Result<()> {
        if points.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "a boundary needs at least 3 vertices, got {}",
                points.len()
            ))
            .into());
        }
        self.boundary = points;
        Ok(())
    }

    /// The boundary vertices, empty until one is assigned.
    #[must_use]
    pub fn boundary(&self) -> &[Point2] {
        &self.boundary
    }

    /// Whether a boundary has been assigned.
    #[must_use]
    pub fn has_boundary(&self) -> bool {
        !self.boundary.is_empty()
    }

    /// Height above the level plane.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Sets the height; negative values clamp to zero.
    pub fn set_height(&mut self, height: f64) {
        self.height = height.max(0.0);
    }

    /// Elevation of the floor plane.
    #[must_use]
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Sets the elevation of the floor plane.
    pub fn set_level(&mut self, level: f64) {
        self.level = level;
    }

    /// Optional name or type tag.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the name or type tag.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Unsigned area of the boundary polygon; zero while empty.
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area_2d(&self.boundary).abs()
    }

    /// Horizontal extent of the bounding box; zero while empty.
    #[must_use]
    pub fn size_x(&self) -> f64 {
        self.bounds().map_or(0.0, |bounds| bounds.size_x())
    }

    /// Vertical extent of the bounding box; zero while empty.
    #[must_use]
    pub fn size_y(&self) -> f64 {
        self.bounds().map_or(0.0, |bounds| bounds.size_y())
    }

    /// Bounding box of the boundary, `None` while empty.
    #[must_use]
    pub fn bounds(&self) -> Option<BoundsBox> {
        BoundsBox::from_points(&self.boundary)
    }

    /// Center of the bounding box, `None` while empty.
    #[must_use]
    pub fn center(&self) -> Option<Point2> {
        self.bounds().map(|bounds| bounds.center())
    }

    /// The boundary projected onto the space's level plane.
    ///
    /// The export surface for serialization collaborators: plain vertex
    /// positions with the level as the third coordinate.
    #[must_use]
    pub fn floor_points(&self) -> Vec<Point3> {
        self.boundary
            .iter()
            .map(|point| Point3::new(point.x, point.y, self.level))
            .collect()
    }

    /// Whether every boundary vertex lies within or on the outer polygon.
    ///
    /// False for an empty space or an outer polygon with fewer than
    /// three vertices.
    #[must_use]
    pub fn fit_within(&self, outer: &[Point2]) -> bool {
        if self.boundary.is_empty() || outer.len() < 3 {
            return false;
        }
        self.boundary
            .iter()
            .all(|vertex| point_in_polygon_2d(vertex, outer))
    }

    /// Rotates the boundary about its own center.
    ///
    /// Positive degrees rotate counter-clockwise. A zero angle or an
    /// empty boundary is a no-op.
    pub fn rotate(&mut self, degrees: f64) {
        if let Some(pivot) = self.center() {
            self.rotate_about(degrees, pivot);
        }
    }

    /// Rotates the boundary about an explicit pivot.
    ///
    /// Positive degrees rotate counter-clockwise. A zero angle or an
    /// empty boundary is a no-op.
    pub fn rotate_about(&mut self, degrees: f64, pivot: Point2) {
        if self.boundary.is_empty() || degrees.abs() < TOLERANCE {
            return;
        }
        let radians = to_radians(degrees);
        for vertex in &mut self.boundary {
            *vertex = rotate_point_2d(vertex, &pivot, radians);
        }
    }

    /// Translates the boundary in place; a no-op while empty.
    pub fn move_by(&mut self, dx: f64, dy: f64) {
        for vertex in &mut self.boundary {
            vertex.x += dx;
            vertex.y += dy;
        }
    }

    /// Merges another polygon into this space's boundary by union.
    ///
    /// An empty space adopts the other polygon outright. The union is
    /// best-effort: inputs that do not merge into a single simple
    /// outline degrade to the convex hull of both vertex sets.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` when the other polygon has
    /// fewer than three vertices.
    pub fn add(&mut self, other: &[Point2]) -> Result<()> {
        if other.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "a merge polygon needs at least 3 vertices, got {}",
                other.len()
            ))
            .into());
        }
        if self.boundary.is_empty() {
            return self.set_boundary(other.to_vec());
        }
        let merged = boundary_union_2d(&self.boundary, other);
        self.set_boundary(merged)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Vec<Point2> {
        vec![p(x, y), p(x + w, y), p(x + w, y + h), p(x, y + h)]
    }

    #[test]
    fn empty_space_has_no_derived_views() {
        let space = Space::new();
        assert!(!space.has_boundary());
        assert!(space.bounds().is_none());
        assert!(space.center().is_none());
        assert_relative_eq!(space.area(), 0.0);
        assert_relative_eq!(space.size_x(), 0.0);
        assert!(space.floor_points().is_empty());
        assert!(!space.fit_within(&rect(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn boundary_rejects_too_few_vertices() {
        let mut space = Space::new();
        assert!(space.set_boundary(vec![p(0.0, 0.0), p(1.0, 0.0)]).is_err());
        assert!(!space.has_boundary());
    }

    #[test]
    fn derived_views_follow_the_boundary() {
        let mut space = Space::from_boundary(rect(0.0, 0.0, 4.0, 2.0)).unwrap();
        assert_relative_eq!(space.area(), 8.0);
        assert_relative_eq!(space.size_x(), 4.0);
        assert_relative_eq!(space.size_y(), 2.0);

        space.set_boundary(rect(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert_relative_eq!(space.area(), 100.0);
        assert_relative_eq!(space.center().unwrap().x, 5.0);
    }

    #[test]
    fn height_clamps_to_zero() {
        let mut space = Space::new();
        space.set_height(-3.0);
        assert_relative_eq!(space.height(), 0.0);
        space.set_height(4000.0);
        assert_relative_eq!(space.height(), 4000.0);
    }

    #[test]
    fn floor_points_carry_the_level() {
        let mut space = Space::from_boundary(rect(0.0, 0.0, 2.0, 2.0)).unwrap();
        space.set_level(3.5);
        let points = space.floor_points();
        assert_eq!(points.len(), 4);
        assert!(points.iter().all(|point| (point.z - 3.5).abs() < 1e-12));
    }

    #[test]
    fn fit_within_is_reflexive() {
        let space = Space::from_boundary(rect(1.0, 1.0, 5.0, 3.0)).unwrap();
        assert!(space.fit_within(space.boundary()));
    }

    #[test]
    fn fit_within_detects_escape() {
        let outer = rect(0.0, 0.0, 10.0, 10.0);
        let inside = Space::from_boundary(rect(2.0, 2.0, 4.0, 4.0)).unwrap();
        let escaping = Space::from_boundary(rect(8.0, 8.0, 4.0, 4.0)).unwrap();
        assert!(inside.fit_within(&outer));
        assert!(!escaping.fit_within(&outer));
    }

    #[test]
    fn rotate_zero_is_a_no_op() {
        let mut space = Space::from_boundary(rect(0.0, 0.0, 4.0, 2.0)).unwrap();
        let before = space.boundary().to_vec();
        space.rotate(0.0);
        assert_eq!(space.boundary(), before.as_slice());
    }

    #[test]
    fn rotate_quarter_turn_about_center_swaps_extents() {
        let mut space = Space::from_boundary(rect(0.0, 0.0, 4.0, 2.0)).unwrap();
        space.rotate(90.0);
        assert_relative_eq!(space.size_x(), 2.0, epsilon = 1e-9);
        assert_relative_eq!(space.size_y(), 4.0, epsilon = 1e-9);
        // Counter-clockwise: the SE corner ends up at the top.
        assert_relative_eq!(space.center().unwrap().x, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn move_by_translates_every_vertex() {
        let mut space = Space::from_boundary(rect(0.0, 0.0, 2.0, 2.0)).unwrap();
        space.move_by(10.0, -5.0);
        let bounds = space.bounds().unwrap();
        assert_relative_eq!(bounds.sw.x, 10.0);
        assert_relative_eq!(bounds.sw.y, -5.0);
        assert_relative_eq!(space.area(), 4.0);
    }

    #[test]
    fn add_into_empty_adopts_the_polygon() {
        let mut space = Space::new();
        space.add(&rect(0.0, 0.0, 3.0, 3.0)).unwrap();
        assert_relative_eq!(space.area(), 9.0);
    }

    #[test]
    fn add_merges_adjacent_neighbor() {
        let mut space = Space::from_boundary(rect(0.0, 0.0, 4.0, 2.0)).unwrap();
        space.add(&rect(4.0, 0.0, 4.0, 2.0)).unwrap();
        assert_relative_eq!(space.area(), 16.0, epsilon = 1e-6);
    }

    #[test]
    fn add_rejects_degenerate_polygon() {
        let mut space = Space::from_boundary(rect(0.0, 0.0, 4.0, 2.0)).unwrap();
        assert!(space.add(&[p(0.0, 0.0), p(1.0, 1.0)]).is_err());
        assert_relative_eq!(space.area(), 8.0);
    }

    proptest! {
        #[test]
        fn rotation_round_trip_restores_vertices(
            degrees in -360.0f64..360.0,
            x in -1000.0f64..1000.0,
            y in -1000.0f64..1000.0,
            w in 1.0f64..5000.0,
            h in 1.0f64..5000.0,
        ) {
            let original = rect(x, y, w, h);
            let mut space = Space::from_boundary(original.clone()).unwrap();
            let pivot = p(x, y);
            space.rotate_about(degrees, pivot);
            space.rotate_about(-degrees, pivot);
            for (rotated, expected) in space.boundary().iter().zip(&original) {
                prop_assert!((rotated - expected).norm() < 1e-6);
            }
        }

        #[test]
        fn rotation_preserves_area(
            degrees in -360.0f64..360.0,
            w in 1.0f64..5000.0,
            h in 1.0f64..5000.0,
        ) {
            let mut space = Space::from_boundary(rect(0.0, 0.0, w, h)).unwrap();
            let before = space.area();
            space.rotate(degrees);
            prop_assert!((space.area() - before).abs() < before * 1e-9 + 1e-6);
        }
    }
}
