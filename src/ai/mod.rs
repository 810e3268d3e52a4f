//! AI move selection.
//!
//! `HeuristicPolicy` is a shallow, greedy opponent. It never searches past
//! the next move; see `policy` for the tier order.

pub mod policy;

pub use policy::{AiDecision, HeuristicPolicy, Tier};
