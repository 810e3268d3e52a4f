//! Error types for the rules engine, the AI and session configuration.

use thiserror::Error;

use crate::core::{Position, Side};
use crate::rules::Outcome;

/// Errors returned when a move cannot be made.
///
/// None of these are fatal: the board is left exactly as it was and the
/// caller decides how to surface the rejection.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    #[error("illegal move for {side}: {from} -> {to}")]
    IllegalMove {
        side: Side,
        from: Position,
        to: Position,
    },

    #[error("{0} has no legal move available")]
    NoLegalMove(Side),

    #[error("game is already over ({0})")]
    GameOver(Outcome),

    #[error("it is not {0}'s turn")]
    NotYourTurn(Side),

    #[error("no piece is selected")]
    NothingSelected,
}

/// A raw index outside `0..=8` was converted into a [`Position`].
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("invalid position index: {0}")]
pub struct InvalidPosition(pub u8);

/// A session configuration describes an impossible starting layout.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("starting layout places two pieces on {0}")]
    OverlappingStart(Position),
}

/// Convenience Result type for move operations.
pub type Result<T> = std::result::Result<T, MoveError>;
