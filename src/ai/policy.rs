//! Three-tier heuristic move selection.
//!
//! Tiers are tried in order and the first one that yields a move wins:
//!
//! 1. `Win`: a move that completes one of our lines right now
//! 2. `Block`: occupy an empty cell that would complete the opponent's line
//!    if any one of their pieces were moved onto it
//! 3. `Random`: any legal move, in shuffled piece and neighbour order
//!
//! Tiers 1 and 2 walk the rules engine's legal-move list in order, so their
//! choice among several candidates is deterministic but unspecified.
//!
//! The block tier only looks at cells the AI itself could step into, and it
//! treats every opponent piece as able to reach that cell whether or not it
//! is adjacent. That is the intended strength of this opponent.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{BoardState, Move, Position, ShuffleSource, Side};
use crate::graph::adjacent_to;
use crate::rules::RulesEngine;

/// Which tier produced a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Win,
    Block,
    Random,
}

/// A chosen move and the tier that chose it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiDecision {
    pub mv: Move,
    pub tier: Tier,
}

/// Greedy one-ply policy: win, else block, else random.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicPolicy;

impl HeuristicPolicy {
    /// Choose a move for `side`, or `None` if it has no legal move.
    ///
    /// Does not touch the board; the caller applies the returned move.
    pub fn choose_move<E, S>(
        &self,
        engine: &E,
        board: &BoardState,
        side: Side,
        rng: &mut S,
    ) -> Option<AiDecision>
    where
        E: RulesEngine + ?Sized,
        S: ShuffleSource + ?Sized,
    {
        let decision = if let Some(mv) = self.winning_move(engine, board, side) {
            AiDecision { mv, tier: Tier::Win }
        } else if let Some(mv) = self.blocking_move(engine, board, side) {
            AiDecision { mv, tier: Tier::Block }
        } else {
            let mv = self.random_move(board, side, rng)?;
            AiDecision { mv, tier: Tier::Random }
        };

        trace!(mv = %decision.mv, tier = ?decision.tier, "ai decision");
        Some(decision)
    }

    /// First legal move that leaves `side` holding a winning line.
    pub fn winning_move<E>(&self, engine: &E, board: &BoardState, side: Side) -> Option<Move>
    where
        E: RulesEngine + ?Sized,
    {
        let pieces = board.piece_set(side);
        engine
            .legal_moves(board, side)
            .into_iter()
            .find(|mv| engine.completes_line(&pieces.with_replaced(mv.from, mv.to)))
    }

    /// First legal move whose destination the opponent could use to win.
    pub fn blocking_move<E>(&self, engine: &E, board: &BoardState, side: Side) -> Option<Move>
    where
        E: RulesEngine + ?Sized,
    {
        let threats = board.piece_set(side.opponent());
        engine.legal_moves(board, side).into_iter().find(|mv| {
            threats
                .iter()
                .any(|k| engine.completes_line(&threats.with_replaced(k, mv.to)))
        })
    }

    /// Legal move found by visiting shuffled pieces and shuffled neighbours.
    ///
    /// Works on copies; the canonical adjacency and the piece set's slot
    /// order are left alone.
    pub fn random_move<S>(&self, board: &BoardState, side: Side, rng: &mut S) -> Option<Move>
    where
        S: ShuffleSource + ?Sized,
    {
        let mut pieces = *board.piece_set(side).positions();
        rng.shuffle_positions(&mut pieces);

        for from in pieces {
            let mut neighbours: SmallVec<[Position; Position::RING_SIZE]> =
                SmallVec::from_slice(adjacent_to(from));
            rng.shuffle_positions(&mut neighbours);

            if let Some(to) = neighbours.into_iter().find(|&to| board.is_empty(to)) {
                return Some(Move::new(side, from, to));
            }
        }

        None
    }
}
