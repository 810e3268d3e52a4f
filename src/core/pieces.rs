//! Per-side piece sets.
//!
//! Each side always owns exactly three pieces. A `PieceSet` keeps them in
//! slot order: moving a piece overwrites its slot, so iteration order is
//! stable across moves.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Number of pieces each side owns.
pub const PIECES_PER_SIDE: usize = 3;

/// The positions occupied by one side's pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceSet([Position; PIECES_PER_SIDE]);

impl PieceSet {
    /// Create a piece set from three positions.
    ///
    /// Positions are expected to be distinct; [`crate::core::BoardState`]
    /// enforces this when building a layout.
    #[must_use]
    pub const fn new(positions: [Position; PIECES_PER_SIDE]) -> Self {
        Self(positions)
    }

    /// Get the positions in slot order.
    #[must_use]
    pub const fn positions(&self) -> &[Position; PIECES_PER_SIDE] {
        &self.0
    }

    /// Iterate over positions in slot order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.0.iter().copied()
    }

    /// Check whether a piece sits on `position`.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.0.contains(&position)
    }

    /// Copy of this set with the piece on `from` moved to `to`.
    ///
    /// Returns an unchanged copy if no piece sits on `from`.
    #[must_use]
    pub fn with_replaced(&self, from: Position, to: Position) -> Self {
        let mut copy = *self;
        copy.replace(from, to);
        copy
    }

    /// Move the piece on `from` to `to`, keeping its slot.
    ///
    /// Returns `false` if no piece sits on `from`.
    pub fn replace(&mut self, from: Position, to: Position) -> bool {
        match self.0.iter().position(|&p| p == from) {
            Some(slot) => {
                self.0[slot] = to;
                true
            }
            None => false,
        }
    }

    /// Positions sorted ascending, for order-insensitive comparison.
    #[must_use]
    pub fn sorted(&self) -> [Position; PIECES_PER_SIDE] {
        let mut sorted = self.0;
        sorted.sort_unstable();
        sorted
    }

    /// Set equality, ignoring slot order.
    #[must_use]
    pub fn same_positions(&self, other: &PieceSet) -> bool {
        self.sorted() == other.sorted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: [Position; 9] = Position::ALL;

    #[test]
    fn test_replace_keeps_slot() {
        let mut set = PieceSet::new([P[0], P[1], P[2]]);
        assert!(set.replace(P[1], P[8]));
        assert_eq!(set.positions(), &[P[0], P[8], P[2]]);
    }

    #[test]
    fn test_replace_missing() {
        let mut set = PieceSet::new([P[0], P[1], P[2]]);
        assert!(!set.replace(P[5], P[6]));
        assert_eq!(set.positions(), &[P[0], P[1], P[2]]);
    }

    #[test]
    fn test_with_replaced_is_scratch_copy() {
        let set = PieceSet::new([P[5], P[6], P[7]]);
        let moved = set.with_replaced(P[7], P[8]);

        assert_eq!(set.positions(), &[P[5], P[6], P[7]]);
        assert_eq!(moved.positions(), &[P[5], P[6], P[8]]);
    }

    #[test]
    fn test_same_positions_ignores_order() {
        let a = PieceSet::new([P[2], P[8], P[6]]);
        let b = PieceSet::new([P[6], P[2], P[8]]);
        let c = PieceSet::new([P[6], P[2], P[7]]);

        assert!(a.same_positions(&b));
        assert!(!a.same_positions(&c));
    }
}
