use tracing::warn;

use crate::error::{GeometryError, LayoutError, Result};
use crate::math::Point2;
use crate::shaper;
use crate::space::Space;

/// Minimum passage capacity in persons.
const MIN_PERSONS: u32 = 3;
/// Clear width required per person passing simultaneously.
const PERSON_WIDTH: f64 = 570.0;
/// Corridors sit this much below the hosting floor's height.
const HEIGHT_CLEARANCE: f64 = 0.25;

/// Macro-shape catalog for corridors.
///
/// Records which generator produced the current boundary; the tag and
/// the boundary are always assigned together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorridorShape {
    #[default]
    Unknown,
    H,
    I,
    L,
    T,
    U,
    X,
}

/// A circulation space whose width derives from passage capacity.
#[derive(Debug, Clone)]
pub struct Corridor {
    space: Space,
    persons: u32,
    width: f64,
    shape: CorridorShape,
}

impl Default for Corridor {
    fn default() -> Self {
        Self::new(MIN_PERSONS)
    }
}

impl Corridor {
    /// Creates a corridor sized for a capacity; capacities below the
    /// minimum of three persons are coerced up to it.
    #[must_use]
    pub fn new(persons: u32) -> Self {
        let mut corridor = Self {
            space: Space::new(),
            persons: MIN_PERSONS,
            width: 0.0,
            shape: CorridorShape::Unknown,
        };
        corridor.set_persons(persons);
        corridor
    }

    /// Capacity as the number of persons who can pass along the
    /// corridor simultaneously.
    #[must_use]
    pub fn persons(&self) -> u32 {
        self.persons
    }

    /// Sets the capacity and recomputes the width from scratch.
    pub fn set_persons(&mut self, persons: u32) {
        self.persons = persons.max(MIN_PERSONS);
        self.width = f64::from(self.persons) * PERSON_WIDTH;
    }

    /// Clear width derived from the capacity.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Which generator produced the current boundary.
    #[must_use]
    pub fn shape(&self) -> CorridorShape {
        self.shape
    }

    /// The corridor's space.
    #[must_use]
    pub fn space(&self) -> &Space {
        &self.space
    }

    /// Mutable access to the corridor's space.
    pub fn space_mut(&mut self) -> &mut Space {
        &mut self.space
    }

    /// Lays the corridor as an H within the floor's bounding box, inset
    /// by `margin`, then rotates by `rotate` degrees.
    ///
    /// # Errors
    ///
    /// `LayoutError::DimensionExceeded` when twice the width does not
    /// fit the floor's x extent or the width its y extent (corridor
    /// unchanged); a `ShapeError` from the generator; or
    /// `LayoutError::OutsideBoundary` when the rotated result does not
    /// fit the floor (boundary stays assigned, rollback is the
    /// caller's).
    pub fn make_h(&mut self, floor: &Space, margin: f64, rotate: f64) -> Result<()> {
        self.check_extents(self.width * 2.0, floor)?;
        let (origin, x_size, y_size) = inset_frame(floor, margin)?;
        self.take_floor_profile(floor);
        let points = shaper::make_h(origin, x_size, y_size, self.width, self.width, self.width)?;
        self.adopt(points, CorridorShape::H, floor, rotate)
    }

    /// Lays the corridor as an L within the floor's bounding box, inset
    /// by `margin`, then rotates by `rotate` degrees.
    ///
    /// # Errors
    ///
    /// As [`Corridor::make_h`], with the width itself as the critical
    /// x dimension.
    pub fn make_l(&mut self, floor: &Space, margin: f64, rotate: f64) -> Result<()> {
        self.check_extents(self.width, floor)?;
        let (origin, x_size, y_size) = inset_frame(floor, margin)?;
        self.take_floor_profile(floor);
        let points = shaper::make_l(origin, x_size, y_size, self.width, self.width)?;
        self.adopt(points, CorridorShape::L, floor, rotate)
    }

    /// Lays the corridor as a T within the floor's bounding box, inset
    /// by `margin`, then rotates by `rotate` degrees.
    ///
    /// # Errors
    ///
    /// As [`Corridor::make_l`].
    pub fn make_t(&mut self, floor: &Space, margin: f64, rotate: f64) -> Result<()> {
        self.check_extents(self.width, floor)?;
        let (origin, x_size, y_size) = inset_frame(floor, margin)?;
        self.take_floor_profile(floor);
        let points = shaper::make_t(origin, x_size, y_size, self.width, self.width)?;
        self.adopt(points, CorridorShape::T, floor, rotate)
    }

    /// Lays the corridor as a U within the floor's bounding box, inset
    /// by `margin`, then rotates by `rotate` degrees.
    ///
    /// # Errors
    ///
    /// As [`Corridor::make_h`]: both arms count against the x extent.
    pub fn make_u(&mut self, floor: &Space, margin: f64, rotate: f64) -> Result<()> {
        self.check_extents(self.width * 2.0, floor)?;
        let (origin, x_size, y_size) = inset_frame(floor, margin)?;
        self.take_floor_profile(floor);
        let points = shaper::make_u(origin, x_size, y_size, self.width, self.width, self.width)?;
        self.adopt(points, CorridorShape::U, floor, rotate)
    }

    /// Lays the corridor as a cross within the floor's bounding box,
    /// inset by `margin`, then rotates by `rotate` degrees.
    ///
    /// # Errors
    ///
    /// As [`Corridor::make_l`].
    pub fn make_x(&mut self, floor: &Space, margin: f64, rotate: f64) -> Result<()> {
        self.check_extents(self.width, floor)?;
        let (origin, x_size, y_size) = inset_frame(floor, margin)?;
        self.take_floor_profile(floor);
        let points = shaper::make_cross(origin, x_size, y_size, self.width, self.width)?;
        self.adopt(points, CorridorShape::X, floor, rotate)
    }

    /// Assigns a generated boundary together with its shape tag.
    pub(crate) fn set_boundary_tagged(
        &mut self,
        points: Vec<Point2>,
        shape: CorridorShape,
    ) -> Result<()> {
        self.space.set_boundary(points)?;
        self.shape = shape;
        Ok(())
    }

    fn check_extents(&self, critical_width: f64, floor: &Space) -> Result<()> {
        if critical_width >= floor.size_x() || self.width >= floor.size_y() {
            warn!(
                critical_width,
                floor_x = floor.size_x(),
                floor_y = floor.size_y(),
                "critical corridor dimension exceeds floor boundary"
            );
            return Err(LayoutError::DimensionExceeded {
                required: critical_width,
                available: floor.size_x().min(floor.size_y()),
            }
            .into());
        }
        Ok(())
    }

    fn take_floor_profile(&mut self, floor: &Space) {
        self.space.set_height(floor.height() - HEIGHT_CLEARANCE);
        self.space.set_level(floor.level());
    }

    fn adopt(
        &mut self,
        points: Vec<Point2>,
        shape: CorridorShape,
        floor: &Space,
        rotate: f64,
    ) -> Result<()> {
        self.set_boundary_tagged(points, shape)?;
        self.space.rotate(rotate);
        if self.space.fit_within(floor.boundary()) {
            Ok(())
        } else {
            warn!(?shape, rotate, "rotated corridor does not fit the floor");
            Err(LayoutError::OutsideBoundary.into())
        }
    }
}

/// Floor bounding box inset by a margin on every side.
fn inset_frame(floor: &Space, margin: f64) -> Result<(Point2, f64, f64)> {
    let bounds = floor.bounds().ok_or(GeometryError::EmptyBoundary)?;
    let origin = Point2::new(bounds.sw.x + margin, bounds.sw.y + margin);
    let x_size = (bounds.se.x - margin) - origin.x;
    let y_size = (bounds.nw.y - margin) - origin.y;
    Ok((origin, x_size, y_size))
}
