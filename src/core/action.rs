//! Move requests and applied-move events.
//!
//! A `Move` is what a caller asks for: slide one of `side`'s pieces from
//! `from` to `to`. A `MoveApplied` is what the engine hands back once the
//! move is committed. The presentation layer animates it, then calls the
//! win check and turn advance; the engine never does that on its own.

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::side::Side;

/// A requested piece relocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side moving.
    pub side: Side,
    /// Position the piece leaves.
    pub from: Position,
    /// Position the piece lands on.
    pub to: Position,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(side: Side, from: Position, to: Position) -> Self {
        Self { side, from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} -> {}", self.side, self.from, self.to)
    }
}

/// A committed move, as recorded in the board history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveApplied {
    /// The side that moved.
    pub side: Side,
    /// Position the piece left.
    pub from: Position,
    /// Position the piece landed on.
    pub to: Position,
    /// Index of this move within the round (0 for the first move).
    pub sequence: usize,
}

impl MoveApplied {
    /// The move this event records.
    #[must_use]
    pub const fn as_move(&self) -> Move {
        Move::new(self.side, self.from, self.to)
    }
}
