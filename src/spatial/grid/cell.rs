/// Index of a body in the simulation's body array.
pub type BodyIndex = u32;

/// One grid cell: the bodies whose centres lie inside it this pass.
#[derive(Clone, Debug, Default)]
pub struct Cell {
    bodies: Vec<BodyIndex>,
}

impl Cell {
    pub const fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.bodies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    #[inline]
    pub fn bodies(&self) -> &[BodyIndex] {
        &self.bodies
    }

    #[inline]
    pub(super) fn push(&mut self, index: BodyIndex) {
        self.bodies.push(index);
    }

    #[inline]
    pub(super) fn clear(&mut self) {
        self.bodies.clear();
    }
}
