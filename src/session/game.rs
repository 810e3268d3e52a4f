//! The game session: one round's complete mutable state.

use im::Vector;
use tracing::{debug, info, instrument, warn};

use crate::ai::{HeuristicPolicy, Tier};
use crate::core::{
    BoardState, GameRng, Move, MoveApplied, Occupant, PieceSet, Position, SessionConfig,
    ShuffleSource, Side, Turn,
};
use crate::error::{ConfigError, MoveError, Result};
use crate::rules::{MoveList, Outcome, RingRules, RulesEngine};

/// What a click on a board position did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickResult {
    /// Nothing happened (not the human's turn, game over, or not a piece).
    Ignored,
    /// A human piece was picked up.
    Selected(Position),
    /// The selected piece moved. Call `complete_move` once it is shown.
    Moved(MoveApplied),
    /// The move was rejected; the selection has been cleared.
    Rejected(MoveError),
}

/// Owned state for a single local game.
///
/// The presentation layer holds one of these and drives it:
///
/// 1. The human picks a piece and a destination (`click`, or
///    `select` + `move_selected`, or `apply_move` directly).
/// 2. Once the returned `MoveApplied` has been shown, the caller runs
///    `complete_move` (or `check_win` / `set_outcome` / `advance_turn`).
/// 3. On the AI's turn, `ai_select_and_apply_move`, then step 2 again.
///
/// ```
/// use circular_ttt::{GameSession, Outcome, Side, SessionConfig};
/// use circular_ttt::core::Position;
///
/// let mut session = GameSession::new(SessionConfig::default()).unwrap();
/// let p = Position::ALL;
///
/// let applied = session.apply_move(Side::Player, p[2], p[8]).unwrap();
/// assert_eq!(session.complete_move(&applied), Outcome::InProgress);
/// assert_eq!(session.current_turn(), Side::Ai);
///
/// let reply = session.ai_select_and_apply_move().unwrap();
/// session.complete_move(&reply);
/// assert_eq!(session.current_turn(), Side::Player);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession<R = GameRng> {
    config: SessionConfig,
    rules: RingRules,
    policy: HeuristicPolicy,
    initial: BoardState,
    board: BoardState,
    turn: Turn,
    outcome: Outcome,
    selection: Option<Position>,
    rng: R,
}

impl GameSession<GameRng> {
    /// Create a session seeded from `config.seed`.
    pub fn new(config: SessionConfig) -> std::result::Result<Self, ConfigError> {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: ShuffleSource> GameSession<R> {
    /// Create a session with a caller-supplied random source.
    pub fn with_rng(config: SessionConfig, rng: R) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        let board = BoardState::from_config(&config)?;

        Ok(Self {
            rules: RingRules::new(config.win_rule),
            policy: HeuristicPolicy,
            initial: board.clone(),
            board,
            turn: config.first_turn,
            outcome: Outcome::InProgress,
            selection: None,
            rng,
            config,
        })
    }

    // === Round lifecycle ===

    /// Restore the starting layout, first turn, and an in-progress outcome.
    ///
    /// Also drops the selection and the move history.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = self.initial.clone();
        self.turn = self.config.first_turn;
        self.outcome = Outcome::InProgress;
        self.selection = None;
        debug!("session reset");
    }

    // === Rules ===

    /// Check whether `side` may move its piece from `from` to `to`.
    #[must_use]
    pub fn is_legal_move(&self, side: Side, from: Position, to: Position) -> bool {
        self.rules.is_legal_move(&self.board, Move::new(side, from, to))
    }

    /// Apply a move for `side`.
    ///
    /// Neither advances the turn nor checks for a win; see `complete_move`.
    /// Fails with `GameOver` once the round has ended and `IllegalMove` if
    /// the move breaks the rules. In both cases the board is unchanged.
    /// Any selection is dropped either way.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, side: Side, from: Position, to: Position) -> Result<MoveApplied> {
        self.selection = None;
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver(self.outcome));
        }
        self.rules.apply_move(&mut self.board, Move::new(side, from, to))
    }

    /// Legal moves for `side` on the current board.
    #[must_use]
    pub fn legal_moves(&self, side: Side) -> MoveList {
        self.rules.legal_moves(&self.board, side)
    }

    /// Check whether `side` holds a winning line.
    #[must_use]
    pub fn check_win(&self, side: Side) -> bool {
        self.rules.check_win(&self.board, side)
    }

    // === Turn and outcome ===

    /// Hand the move to the other side.
    pub fn advance_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    #[must_use]
    pub fn current_turn(&self) -> Turn {
        self.turn
    }

    /// Declare `side` the winner.
    pub fn set_outcome(&mut self, side: Side) {
        self.outcome = Outcome::won_by(side);
        info!(outcome = %self.outcome, "round over");
    }

    /// End the round without a winner, e.g. after `NoLegalMove`.
    pub fn declare_draw(&mut self) {
        self.outcome = Outcome::Draw;
        info!(outcome = %self.outcome, "round over");
    }

    #[must_use]
    pub fn current_outcome(&self) -> Outcome {
        self.outcome
    }

    /// Finish a move once the caller is done presenting it.
    ///
    /// Declares the mover the winner if it now holds a line, then passes
    /// the turn. Returns the resulting outcome.
    ///
    /// An event whose side is not the side to move (already completed, or
    /// stale) is ignored.
    pub fn complete_move(&mut self, applied: &MoveApplied) -> Outcome {
        if applied.side != self.turn {
            return self.outcome;
        }
        if self.check_win(applied.side) {
            self.set_outcome(applied.side);
        }
        self.advance_turn();
        self.outcome
    }

    // === AI ===

    /// Let the AI pick and apply exactly one move.
    ///
    /// Fails with `GameOver` or `NotYourTurn` when called out of turn, and
    /// with `NoLegalMove` if none of its pieces can move.
    pub fn ai_select_and_apply_move(&mut self) -> Result<MoveApplied> {
        self.ai_play().map(|(applied, _)| applied)
    }

    /// Like `ai_select_and_apply_move`, also reporting the tier that fired.
    #[instrument(skip(self))]
    pub fn ai_play(&mut self) -> Result<(MoveApplied, Tier)> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver(self.outcome));
        }
        if self.turn != Side::Ai {
            return Err(MoveError::NotYourTurn(Side::Ai));
        }

        let decision = self
            .policy
            .choose_move(&self.rules, &self.board, Side::Ai, &mut self.rng);
        let Some(decision) = decision else {
            warn!("AI has no legal move");
            return Err(MoveError::NoLegalMove(Side::Ai));
        };

        let applied = self.rules.apply_move(&mut self.board, decision.mv)?;
        Ok((applied, decision.tier))
    }

    // === Human selection ===

    /// Pick up the human piece on `position`.
    ///
    /// Only works on the human's turn in a running game, and only on a
    /// position holding a human piece. Returns whether it was selected.
    pub fn select(&mut self, position: Position) -> bool {
        if !self.human_can_act() || !self.board.is_owned_by(position, Side::Player) {
            return false;
        }
        self.selection = Some(position);
        true
    }

    /// Move the selected piece to `to`.
    ///
    /// The selection is cleared whether or not the move succeeds.
    pub fn move_selected(&mut self, to: Position) -> Result<MoveApplied> {
        let from = self.selection.take().ok_or(MoveError::NothingSelected)?;
        self.apply_move(Side::Player, from, to)
    }

    /// Handle a click on `position` the way the board UI does: the first
    /// click picks a piece up, the second tries to move it there.
    pub fn click(&mut self, position: Position) -> ClickResult {
        if !self.human_can_act() {
            return ClickResult::Ignored;
        }

        let selection = self.selection;
        match selection {
            None if self.select(position) => ClickResult::Selected(position),
            None => ClickResult::Ignored,
            Some(_) => match self.move_selected(position) {
                Ok(applied) => ClickResult::Moved(applied),
                Err(err) => ClickResult::Rejected(err),
            },
        }
    }

    #[must_use]
    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    fn human_can_act(&self) -> bool {
        !self.outcome.is_terminal() && self.turn == Side::Player
    }

    // === Read access ===

    #[must_use]
    pub fn occupant_at(&self, position: Position) -> Occupant {
        self.board.occupant_at(position)
    }

    #[must_use]
    pub fn piece_set(&self, side: Side) -> &PieceSet {
        self.board.piece_set(side)
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveApplied> {
        self.board.history()
    }

    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> &RingRules {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WinRule;

    const P: [Position; 9] = Position::ALL;

    fn session() -> GameSession {
        GameSession::new(SessionConfig::default()).unwrap()
    }

    #[test]
    fn test_new_session() {
        let s = session();
        assert_eq!(s.current_turn(), Side::Player);
        assert_eq!(s.current_outcome(), Outcome::InProgress);
        assert_eq!(s.selection(), None);
        assert_eq!(s.occupant_at(P[0]), Occupant::PlayerMark);
        assert_eq!(s.occupant_at(P[7]), Occupant::AiMark);
    }

    #[test]
    fn test_new_rejects_bad_layout() {
        let config = SessionConfig::new().with_layout([P[0], P[1], P[2]], [P[2], P[3], P[4]]);
        assert_eq!(
            GameSession::new(config).unwrap_err(),
            ConfigError::OverlappingStart(P[2])
        );
    }

    #[test]
    fn test_apply_move_does_not_advance_turn() {
        let mut s = session();
        s.apply_move(Side::Player, P[2], P[8]).unwrap();
        assert_eq!(s.current_turn(), Side::Player);
        assert_eq!(s.current_outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_complete_move_declares_win() {
        let config = SessionConfig::new().with_layout([P[0], P[8], P[3]], [P[5], P[6], P[7]]);
        let mut s = GameSession::new(config).unwrap();

        let applied = s.apply_move(Side::Player, P[3], P[4]).unwrap();
        assert!(s.check_win(Side::Player));
        assert_eq!(s.current_outcome(), Outcome::InProgress);

        assert_eq!(s.complete_move(&applied), Outcome::PlayerWon);
        assert_eq!(s.current_turn(), Side::Ai);

        let err = s.apply_move(Side::Ai, P[5], P[3]).unwrap_err();
        assert_eq!(err, MoveError::GameOver(Outcome::PlayerWon));
        assert_eq!(
            s.ai_select_and_apply_move().unwrap_err(),
            MoveError::GameOver(Outcome::PlayerWon)
        );
    }

    #[test]
    fn test_ai_refuses_out_of_turn() {
        let mut s = session();
        assert_eq!(
            s.ai_select_and_apply_move().unwrap_err(),
            MoveError::NotYourTurn(Side::Ai)
        );
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_ai_moves_once() {
        let mut s = session();
        let applied = s.apply_move(Side::Player, P[2], P[3]).unwrap();
        s.complete_move(&applied);

        let (reply, _) = s.ai_play().unwrap();
        assert_eq!(reply.side, Side::Ai);
        assert_eq!(reply.sequence, 1);
        assert_eq!(s.history().len(), 2);
        assert!(s.board().is_consistent());
    }

    #[test]
    fn test_click_flow() {
        let mut s = session();

        // Empty cell and AI piece are ignored
        assert_eq!(s.click(P[4]), ClickResult::Ignored);
        assert_eq!(s.click(P[5]), ClickResult::Ignored);

        assert_eq!(s.click(P[2]), ClickResult::Selected(P[2]));
        assert_eq!(s.selection(), Some(P[2]));

        match s.click(P[8]) {
            ClickResult::Moved(applied) => {
                assert_eq!(applied.as_move(), Move::new(Side::Player, P[2], P[8]));
            }
            other => panic!("expected move, got {other:?}"),
        }
        assert_eq!(s.selection(), None);
    }

    #[test]
    fn test_click_rejected_clears_selection() {
        let mut s = session();
        s.click(P[1]);

        let result = s.click(P[4]);
        assert_eq!(
            result,
            ClickResult::Rejected(MoveError::IllegalMove {
                side: Side::Player,
                from: P[1],
                to: P[4]
            })
        );
        assert_eq!(s.selection(), None);
        assert_eq!(s.board(), &BoardState::default());
    }

    #[test]
    fn test_click_ignored_on_ai_turn() {
        let mut s = session();
        s.advance_turn();
        assert_eq!(s.click(P[0]), ClickResult::Ignored);
        assert!(!s.select(P[0]));
    }

    #[test]
    fn test_move_selected_without_selection() {
        let mut s = session();
        assert_eq!(s.move_selected(P[3]).unwrap_err(), MoveError::NothingSelected);
    }

    #[test]
    fn test_complete_move_twice_passes_turn_once() {
        let mut s = session();
        let applied = s.apply_move(Side::Player, P[2], P[3]).unwrap();

        s.complete_move(&applied);
        assert_eq!(s.current_turn(), Side::Ai);

        assert_eq!(s.complete_move(&applied), Outcome::InProgress);
        assert_eq!(s.current_turn(), Side::Ai);
    }

    #[test]
    fn test_apply_move_drops_selection() {
        let mut s = session();
        assert!(s.select(P[1]));

        s.apply_move(Side::Player, P[1], P[4]).unwrap_err();
        assert_eq!(s.selection(), None);
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut s = GameSession::new(SessionConfig::new().with_win_rule(WinRule::AllLines)).unwrap();
        let applied = s.apply_move(Side::Player, P[2], P[3]).unwrap();
        s.complete_move(&applied);
        s.declare_draw();
        s.clear_selection();

        s.reset();

        assert_eq!(s.board(), &BoardState::default());
        assert_eq!(s.current_turn(), Side::Player);
        assert_eq!(s.current_outcome(), Outcome::InProgress);
        assert_eq!(s.selection(), None);
        assert_eq!(s.rules().win_rule(), WinRule::AllLines);
    }
}
