//! Board positions.
//!
//! The board is a ring of 8 nodes around a single hub:
//! - `0..=7`: Ring positions, numbered around the circle
//! - `8`: The center, adjacent to every ring position
//!
//! A `Position` can only hold a valid index. Values coming from outside the
//! core go through `TryFrom<u8>`, which fails with [`InvalidPosition`].
//!
//! ```
//! use circular_ttt::core::Position;
//!
//! let center = Position::CENTER;
//! assert!(center.is_center());
//! assert_eq!(center.index(), 8);
//!
//! assert!(Position::new(3).is_some());
//! assert!(Position::new(9).is_none());
//! assert!(Position::try_from(12u8).is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::InvalidPosition;

/// One of the nine nodes of the circular board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    /// Number of positions on the board.
    pub const COUNT: usize = 9;

    /// Number of positions on the outer ring.
    pub const RING_SIZE: usize = 8;

    /// The hub node.
    pub const CENTER: Position = Position(8);

    /// Every position, ring first, center last.
    pub const ALL: [Position; Self::COUNT] = [
        Position(0),
        Position(1),
        Position(2),
        Position(3),
        Position(4),
        Position(5),
        Position(6),
        Position(7),
        Position(8),
    ];

    /// Create a position from a raw index, or `None` if out of range.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < Self::COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Get the index (0-8), usable for array lookups.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Is this the hub node?
    #[must_use]
    pub const fn is_center(self) -> bool {
        self.0 == Self::CENTER.0
    }

    /// Iterate over the 8 ring positions in order.
    pub fn ring() -> impl Iterator<Item = Position> {
        Self::ALL.into_iter().filter(|p| !p.is_center())
    }
}

impl TryFrom<u8> for Position {
    type Error = InvalidPosition;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidPosition(value))
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> Self {
        position.0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_center() {
            write!(f, "center")
        } else {
            write!(f, "ring {}", self.0)
        }
    }
}
