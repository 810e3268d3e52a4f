//! Core value types: positions, sides, piece sets, moves, board state,
//! configuration and RNG.
//!
//! Everything here is plain data. Rules live in `rules`, move choice in `ai`.

pub mod position;
pub mod side;
pub mod pieces;
pub mod action;
pub mod state;
pub mod rng;
pub mod config;

pub use position::Position;
pub use side::{Occupant, Side, SideMap, Turn};
pub use pieces::{PieceSet, PIECES_PER_SIDE};
pub use action::{Move, MoveApplied};
pub use state::BoardState;
pub use rng::{GameRng, GameRngState, ShuffleSource};
pub use config::{SessionConfig, WinRule};
