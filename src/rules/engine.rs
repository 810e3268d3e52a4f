//! Rules engine trait and the ring-board implementation.
//!
//! The engine answers three questions about a `BoardState`:
//! - Is this move legal?
//! - What does the board look like after it?
//! - Has a side completed a winning line?
//!
//! Turn order and the game outcome are not its business; the session owns
//! them so the caller can finish animating a move before a win is declared.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{BoardState, Move, MoveApplied, PieceSet, Side, WinRule};
use crate::error::{MoveError, Result};
use crate::graph::{adjacent_to, winning_lines};

/// Upper bound on legal moves for one side: three pieces, three empty cells.
pub const MAX_LEGAL_MOVES: usize = 9;

/// Legal moves for one side, in piece-slot then neighbour order.
pub type MoveList = SmallVec<[Move; MAX_LEGAL_MOVES]>;

/// State of the round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No side has won yet.
    #[default]
    InProgress,
    /// The human completed a line.
    PlayerWon,
    /// The AI completed a line.
    AiWon,
    /// The caller ended the round without a winner.
    Draw,
}

impl Outcome {
    /// The outcome in which `side` has won.
    #[must_use]
    pub const fn won_by(side: Side) -> Self {
        match side {
            Side::Player => Outcome::PlayerWon,
            Side::Ai => Outcome::AiWon,
        }
    }

    /// The winning side, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::PlayerWon => Some(Side::Player),
            Outcome::AiWon => Some(Side::Ai),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(self, side: Side) -> bool {
        self.winner() == Some(side)
    }

    /// Terminal outcomes accept no further moves.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::PlayerWon => write!(f, "Player wins"),
            Outcome::AiWon => write!(f, "AI wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `is_legal_move`: Pure predicate, never mutates
/// - `apply_move`: On `Err`, the board must be untouched
/// - `completes_line`: Judges a bare piece set, so the AI can test
///   hypothetical sets without building a board
pub trait RulesEngine {
    /// Check whether `mv` may be applied to `board`.
    fn is_legal_move(&self, board: &BoardState, mv: Move) -> bool;

    /// Validate and apply `mv`.
    fn apply_move(&self, board: &mut BoardState, mv: Move) -> Result<MoveApplied>;

    /// Check whether a piece set occupies a winning line.
    fn completes_line(&self, pieces: &PieceSet) -> bool;

    // === Convenience Methods ===

    /// Check whether `side` currently holds a winning line.
    fn check_win(&self, board: &BoardState, side: Side) -> bool {
        self.completes_line(board.piece_set(side))
    }

    /// Enumerate all legal moves for a side.
    fn legal_moves(&self, board: &BoardState, side: Side) -> MoveList {
        board
            .piece_set(side)
            .iter()
            .flat_map(|from| adjacent_to(from).iter().map(move |&to| Move::new(side, from, to)))
            .filter(|&mv| self.is_legal_move(board, mv))
            .collect()
    }
}

/// Rules for the nine-node circular board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RingRules {
    win_rule: WinRule,
}

impl RingRules {
    /// Create rules with the given win rule.
    #[must_use]
    pub const fn new(win_rule: WinRule) -> Self {
        Self { win_rule }
    }

    /// The win rule in force.
    #[must_use]
    pub const fn win_rule(&self) -> WinRule {
        self.win_rule
    }
}

impl RulesEngine for RingRules {
    fn is_legal_move(&self, board: &BoardState, mv: Move) -> bool {
        board.is_owned_by(mv.from, mv.side)
            && adjacent_to(mv.from).contains(&mv.to)
            && board.is_empty(mv.to)
    }

    fn apply_move(&self, board: &mut BoardState, mv: Move) -> Result<MoveApplied> {
        if !self.is_legal_move(board, mv) {
            trace!(%mv, "rejected illegal move");
            return Err(MoveError::IllegalMove {
                side: mv.side,
                from: mv.from,
                to: mv.to,
            });
        }

        let applied = board.relocate(mv);
        debug!(%mv, sequence = applied.sequence, "move applied");
        Ok(applied)
    }

    fn completes_line(&self, pieces: &PieceSet) -> bool {
        winning_lines()
            .iter()
            .filter(|line| self.win_rule.admits(line))
            .any(|line| line.is_filled_by(pieces))
    }
}
