use crate::math::Point2;

use super::Space;

/// An ordered collection of spaces, insertion order preserved.
#[derive(Debug, Clone, Default)]
pub struct SpaceGroup {
    spaces: Vec<Space>,
}

impl SpaceGroup {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of member spaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Whether the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Appends one space.
    pub fn push(&mut self, space: Space) {
        self.spaces.push(space);
    }

    /// Appends every space from an iterator, preserving its order.
    pub fn extend(&mut self, spaces: impl IntoIterator<Item = Space>) {
        self.spaces.extend(spaces);
    }

    /// Removes every member.
    pub fn clear(&mut self) {
        self.spaces.clear();
    }

    /// Member at an index, `None` when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Space> {
        self.spaces.get(index)
    }

    /// The members as a slice, in insertion order.
    #[must_use]
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    /// Iterates the members in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Space> {
        self.spaces.iter()
    }

    /// Iterates the members mutably in insertion order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Space> {
        self.spaces.iter_mut()
    }

    /// Rotates every member about a shared pivot.
    ///
    /// Positive degrees rotate counter-clockwise. Members without a
    /// boundary are skipped as no-ops; rotation of a well-formed
    /// boundary cannot fail, so the group is never left part-rotated.
    pub fn rotate_about(&mut self, degrees: f64, pivot: Point2) {
        for space in &mut self.spaces {
            space.rotate_about(degrees, pivot);
        }
    }
}

impl<'a> IntoIterator for &'a SpaceGroup {
    type Item = &'a Space;
    type IntoIter = std::slice::Iter<'a, Space>;

    fn into_iter(self) -> Self::IntoIter {
        self.spaces.iter()
    }
}
