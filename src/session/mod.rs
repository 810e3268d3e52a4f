//! Game session: the state container the presentation layer drives.
//!
//! Holds the board, turn, outcome, the human's pending selection and the
//! AI's random source. Every operation runs to completion synchronously;
//! a move is either fully applied or not applied at all.

mod game;

pub use game::{ClickResult, GameSession};
