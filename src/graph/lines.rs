//! Winning lines.
//!
//! Eight triples are defined: four ring arcs (`0-1-2`, `2-3-4`, `4-5-6`,
//! `6-7-0`) and four diameters through the center. Which of them actually
//! win a game is decided by [`crate::core::WinRule`].

use serde::{Deserialize, Serialize};

use crate::core::{PieceSet, Position};

const P: [Position; Position::COUNT] = Position::ALL;

/// Three positions that win the game when one side holds all of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// Get the three positions of this line.
    #[must_use]
    pub const fn positions(&self) -> &[Position; 3] {
        &self.0
    }

    /// Check whether `position` lies on this line.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.0.contains(&position)
    }

    /// Diameters pass through the hub; ring arcs do not.
    #[must_use]
    pub fn contains_center(&self) -> bool {
        self.contains(Position::CENTER)
    }

    /// Check whether `pieces` occupies exactly this line.
    ///
    /// Both sides hold three distinct positions, so containment is equality.
    #[must_use]
    pub fn is_filled_by(&self, pieces: &PieceSet) -> bool {
        self.0.iter().all(|&p| pieces.contains(p))
    }
}

static WINNING_LINES: [WinningLine; 8] = [
    WinningLine([P[0], P[1], P[2]]),
    WinningLine([P[2], P[3], P[4]]),
    WinningLine([P[4], P[5], P[6]]),
    WinningLine([P[6], P[7], P[0]]),
    WinningLine([P[1], P[8], P[5]]),
    WinningLine([P[3], P[8], P[7]]),
    WinningLine([P[0], P[8], P[4]]),
    WinningLine([P[2], P[8], P[6]]),
];

/// All eight defined lines.
#[must_use]
pub fn winning_lines() -> &'static [WinningLine; 8] {
    &WINNING_LINES
}
