//! Board state: occupancy, piece sets and move history.
//!
//! ## Invariants
//!
//! At every observable point:
//! - exactly three positions hold `PlayerMark` and three hold `AiMark`
//! - each side's `PieceSet` equals the positions holding its mark
//! - the remaining three positions are `Empty`
//!
//! The only mutation path is [`crate::rules::RulesEngine::apply_move`],
//! which validates first and then updates occupancy, piece set and history
//! together.
//!
//! History uses an `im` persistent vector so cloning a board (for a
//! session snapshot or a hypothetical line of play) stays O(1).

use im::Vector;
use serde::Serialize;

use super::action::{Move, MoveApplied};
use super::config::SessionConfig;
use super::pieces::{PieceSet, PIECES_PER_SIDE};
use super::position::Position;
use super::side::{Occupant, Side, SideMap};
use crate::error::ConfigError;

/// The authoritative board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardState {
    occupants: [Occupant; Position::COUNT],
    pieces: SideMap<PieceSet>,
    history: Vector<MoveApplied>,
}

impl BoardState {
    /// Build a board with the given starting layout.
    ///
    /// Fails if any position is listed twice.
    pub fn with_layout(
        player: [Position; PIECES_PER_SIDE],
        ai: [Position; PIECES_PER_SIDE],
    ) -> Result<Self, ConfigError> {
        let mut occupants = [Occupant::Empty; Position::COUNT];

        for (side, positions) in [(Side::Player, &player), (Side::Ai, &ai)] {
            for &p in positions {
                if !occupants[p.index()].is_empty() {
                    return Err(ConfigError::OverlappingStart(p));
                }
                occupants[p.index()] = side.mark();
            }
        }

        Ok(Self {
            occupants,
            pieces: SideMap::new(|side| match side {
                Side::Player => PieceSet::new(player),
                Side::Ai => PieceSet::new(ai),
            }),
            history: Vector::new(),
        })
    }

    /// Build the starting board described by a session config.
    pub fn from_config(config: &SessionConfig) -> Result<Self, ConfigError> {
        Self::with_layout(config.player_start, config.ai_start)
    }

    /// What sits on `position`.
    #[must_use]
    pub fn occupant_at(&self, position: Position) -> Occupant {
        self.occupants[position.index()]
    }

    /// Check whether `position` is free.
    #[must_use]
    pub fn is_empty(&self, position: Position) -> bool {
        self.occupant_at(position).is_empty()
    }

    /// Check whether `side` has a piece on `position`.
    #[must_use]
    pub fn is_owned_by(&self, position: Position, side: Side) -> bool {
        self.occupant_at(position) == side.mark()
    }

    /// The positions of `side`'s pieces, in slot order.
    #[must_use]
    pub fn piece_set(&self, side: Side) -> &PieceSet {
        &self.pieces[side]
    }

    /// Iterate over free positions in index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|&p| self.is_empty(p))
    }

    /// Every move applied since the last reset, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveApplied> {
        &self.history
    }

    /// Check the 3/3/3 occupancy invariant and piece-set consistency.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let empties = self.empty_positions().count();
        let sides_match = Side::ALL.iter().all(|&side| {
            let owned: Vec<_> = Position::ALL
                .into_iter()
                .filter(|&p| self.is_owned_by(p, side))
                .collect();
            let pieces = self.piece_set(side).sorted();
            owned.as_slice() == pieces.as_slice()
        });
        empties == Position::COUNT - 2 * PIECES_PER_SIDE && sides_match
    }

    /// Commit an already-validated move.
    ///
    /// Callers must have checked legality; this only performs the update.
    pub(crate) fn relocate(&mut self, mv: Move) -> MoveApplied {
        self.occupants[mv.from.index()] = Occupant::Empty;
        self.occupants[mv.to.index()] = mv.side.mark();
        self.pieces[mv.side].replace(mv.from, mv.to);

        let applied = MoveApplied {
            side: mv.side,
            from: mv.from,
            to: mv.to,
            sequence: self.history.len(),
        };
        self.history.push_back(applied);
        applied
    }
}

impl Default for BoardState {
    fn default() -> Self {
        let p = Position::ALL;
        Self {
            occupants: [
                Occupant::PlayerMark,
                Occupant::PlayerMark,
                Occupant::PlayerMark,
                Occupant::Empty,
                Occupant::Empty,
                Occupant::AiMark,
                Occupant::AiMark,
                Occupant::AiMark,
                Occupant::Empty,
            ],
            pieces: SideMap::new(|side| match side {
                Side::Player => PieceSet::new([p[0], p[1], p[2]]),
                Side::Ai => PieceSet::new([p[5], p[6], p[7]]),
            }),
            history: Vector::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: [Position; 9] = Position::ALL;

    #[test]
    fn test_default_layout() {
        let board = BoardState::default();

        for p in [P[0], P[1], P[2]] {
            assert_eq!(board.occupant_at(p), Occupant::PlayerMark);
        }
        for p in [P[5], P[6], P[7]] {
            assert_eq!(board.occupant_at(p), Occupant::AiMark);
        }
        for p in [P[3], P[4], P[8]] {
            assert!(board.is_empty(p));
        }
        assert!(board.is_consistent());
        assert!(board.history().is_empty());
    }

    #[test]
    fn test_default_matches_config() {
        let board = BoardState::from_config(&SessionConfig::default()).unwrap();
        assert_eq!(board, BoardState::default());
    }

    #[test]
    fn test_with_layout_rejects_overlap() {
        let result = BoardState::with_layout([P[0], P[1], P[8]], [P[8], P[6], P[7]]);
        assert_eq!(result, Err(ConfigError::OverlappingStart(P[8])));
    }

    #[test]
    fn test_relocate_updates_everything() {
        let mut board = BoardState::default();
        let applied = board.relocate(Move::new(Side::Player, P[2], P[8]));

        assert_eq!(applied.sequence, 0);
        assert!(board.is_empty(P[2]));
        assert!(board.is_owned_by(P[8], Side::Player));
        assert_eq!(board.piece_set(Side::Player).positions(), &[P[0], P[1], P[8]]);
        assert_eq!(board.history().len(), 1);
        assert!(board.is_consistent());

        let applied = board.relocate(Move::new(Side::Ai, P[5], P[4]));
        assert_eq!(applied.sequence, 1);
        assert_eq!(board.history().back(), Some(&applied));
        assert_eq!(applied.sequence, board.history().len() - 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let board = BoardState::default();
        let mut scratch = board.clone();
        scratch.relocate(Move::new(Side::Ai, P[7], P[8]));

        assert!(board.is_empty(P[8]));
        assert!(board.history().is_empty());
        assert_eq!(scratch.history().len(), 1);
    }

    #[test]
    fn test_empty_positions() {
        let board = BoardState::default();
        let empties: Vec<_> = board.empty_positions().collect();
        assert_eq!(empties, vec![P[3], P[4], P[8]]);
    }
}
