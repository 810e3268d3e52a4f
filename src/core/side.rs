//! Sides, board occupants, and per-side data storage.
//!
//! ## Side
//!
//! The two participants: the human `Player` and the `Ai`. A `Side` also
//! serves as the turn marker.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, used for piece sets and any
//! other per-side data.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player (moves first by default).
    Player,
    /// The computer opponent.
    Ai,
}

/// Whose move it is.
pub type Turn = Side;

impl Side {
    /// Both sides, in index order.
    pub const ALL: [Side; 2] = [Side::Player, Side::Ai];

    /// Get the storage index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Ai => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    /// The mark this side leaves on the board.
    #[must_use]
    pub const fn mark(self) -> Occupant {
        match self {
            Side::Player => Occupant::PlayerMark,
            Side::Ai => Occupant::AiMark,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Ai => write!(f, "AI"),
        }
    }
}

/// What sits on a board position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    #[default]
    Empty,
    PlayerMark,
    AiMark,
}

impl Occupant {
    /// The side owning this mark, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Occupant::Empty => None,
            Occupant::PlayerMark => Some(Side::Player),
            Occupant::AiMark => Some(Side::Ai),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }
}

/// Per-side data storage with O(1) access.
///
/// ```
/// use circular_ttt::core::{Side, SideMap};
///
/// let mut moves: SideMap<u32> = SideMap::with_value(0);
/// moves[Side::Ai] += 1;
/// assert_eq!(moves[Side::Player], 0);
/// assert_eq!(moves[Side::Ai], 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: Side::ALL.map(factory),
        }
    }

    /// Create a SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
