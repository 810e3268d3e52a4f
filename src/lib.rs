//! # circular-ttt
//!
//! Rules engine and heuristic AI for tic-tac-toe on a circular board.
//!
//! ## The game
//!
//! Nine positions: eight on a ring and one in the center. Each side owns
//! three pieces and never gains or loses any; a turn slides one piece along
//! an edge onto an empty position. A side wins by holding a winning line.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: everything mutable lives in a `GameSession` the
//!    caller owns. There are no globals.
//!
//! 2. **Two-phase moves**: `apply_move` commits a move and returns a
//!    `MoveApplied` event. Win checks and turn changes are separate calls,
//!    so a presentation layer can finish animating first.
//!
//! 3. **Injected randomness**: the AI's fallback shuffles come from a
//!    `ShuffleSource`, seeded `GameRng` by default.
//!
//! ## Modules
//!
//! - `core`: Positions, sides, piece sets, moves, board state, config, RNG
//! - `graph`: Static adjacency and winning lines
//! - `rules`: `RulesEngine` trait and the ring-board rules
//! - `ai`: Three-tier heuristic move selection
//! - `session`: The game session driven by the presentation layer
//! - `error`: Error types

pub mod core;
pub mod graph;
pub mod rules;
pub mod ai;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Position, Side, Turn, Occupant, SideMap,
    PieceSet, PIECES_PER_SIDE,
    Move, MoveApplied,
    BoardState,
    GameRng, GameRngState, ShuffleSource,
    SessionConfig, WinRule,
};

pub use crate::graph::{adjacent_to, are_adjacent, winning_lines, WinningLine};

pub use crate::rules::{MoveList, Outcome, RingRules, RulesEngine};

pub use crate::ai::{AiDecision, HeuristicPolicy, Tier};

pub use crate::session::{ClickResult, GameSession};

pub use crate::error::{ConfigError, InvalidPosition, MoveError, Result};
