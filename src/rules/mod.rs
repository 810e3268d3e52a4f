//! Move legality, move application and win detection.
//!
//! `RulesEngine` is the seam; `RingRules` implements it for the circular
//! board. The session and the AI only talk to the board through it.

pub mod engine;

pub use engine::{MoveList, Outcome, RingRules, RulesEngine, MAX_LEGAL_MOVES};
