use std::ops::{Index, IndexMut};

use crate::math::Point2;

/// The sixteen named compass directions, clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompassPoint {
    N,
    Nne,
    Ne,
    Ene,
    E,
    Ese,
    Se,
    Sse,
    S,
    Ssw,
    Sw,
    Wsw,
    W,
    Wnw,
    Nw,
    Nnw,
}

impl CompassPoint {
    /// All sixteen directions, clockwise from north.
    pub const ALL: [CompassPoint; 16] = [
        CompassPoint::N,
        CompassPoint::Nne,
        CompassPoint::Ne,
        CompassPoint::Ene,
        CompassPoint::E,
        CompassPoint::Ese,
        CompassPoint::Se,
        CompassPoint::Sse,
        CompassPoint::S,
        CompassPoint::Ssw,
        CompassPoint::Sw,
        CompassPoint::Wsw,
        CompassPoint::W,
        CompassPoint::Wnw,
        CompassPoint::Nw,
        CompassPoint::Nnw,
    ];

    /// Slot index of this direction, clockwise from north.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Sixteen mutable point slots addressed by compass direction.
///
/// A directional frame for callers that arrange geometry around a shared
/// center. The layout core never reads or writes the rose; it exists for
/// consumers of finished plans.
#[derive(Debug, Clone, PartialEq)]
pub struct CompassRose {
    slots: [Point2; 16],
}

impl Default for CompassRose {
    fn default() -> Self {
        Self {
            slots: [Point2::origin(); 16],
        }
    }
}

impl CompassRose {
    /// Creates a rose with every slot at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the point stored for a direction.
    #[must_use]
    pub fn point(&self, direction: CompassPoint) -> Point2 {
        self.slots[direction.index()]
    }

    /// Stores a point for a direction.
    pub fn set_point(&mut self, direction: CompassPoint, point: Point2) {
        self.slots[direction.index()] = point;
    }
}

impl Index<CompassPoint> for CompassRose {
    type Output = Point2;

    fn index(&self, direction: CompassPoint) -> &Self::Output {
        &self.slots[direction.index()]
    }
}

impl IndexMut<CompassPoint> for CompassRose {
    fn index_mut(&mut self, direction: CompassPoint) -> &mut Self::Output {
        &mut self.slots[direction.index()]
    }
}
