//! Session configuration.
//!
//! A `SessionConfig` fixes everything a round needs up front:
//! - `seed`: seed for the AI's fallback shuffles
//! - `win_rule`: which of the eight lines count as a win
//! - `player_start` / `ai_start`: the starting layout restored by `reset()`
//! - `first_turn`: who moves first after a reset

use serde::{Deserialize, Serialize};

use super::pieces::PIECES_PER_SIDE;
use super::position::Position;
use super::side::Side;
use crate::error::ConfigError;
use crate::graph::WinningLine;

/// Which winning lines end the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinRule {
    /// Only the four diameters through the center win.
    #[default]
    CenterLines,
    /// All eight lines win, ring arcs included.
    AllLines,
}

impl WinRule {
    /// Check whether a line counts as a win under this rule.
    #[must_use]
    pub fn admits(self, line: &WinningLine) -> bool {
        match self {
            WinRule::CenterLines => line.contains_center(),
            WinRule::AllLines => true,
        }
    }
}

/// Configuration for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seed for the AI's fallback shuffles.
    /// Same seed and same human moves produce the same game.
    pub seed: u64,

    /// Which lines win.
    pub win_rule: WinRule,

    /// Human pieces after a reset.
    pub player_start: [Position; PIECES_PER_SIDE],

    /// AI pieces after a reset.
    pub ai_start: [Position; PIECES_PER_SIDE],

    /// Side to move after a reset.
    pub first_turn: Side,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let p = Position::ALL;
        Self {
            seed: 42,
            win_rule: WinRule::CenterLines,
            player_start: [p[0], p[1], p[2]],
            ai_start: [p[5], p[6], p[7]],
            first_turn: Side::Player,
        }
    }
}

impl SessionConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the win rule.
    pub fn with_win_rule(mut self, rule: WinRule) -> Self {
        self.win_rule = rule;
        self
    }

    /// Set the starting layout for both sides.
    pub fn with_layout(
        mut self,
        player: [Position; PIECES_PER_SIDE],
        ai: [Position; PIECES_PER_SIDE],
    ) -> Self {
        self.player_start = player;
        self.ai_start = ai;
        self
    }

    /// Set who moves first.
    pub fn with_first_turn(mut self, side: Side) -> Self {
        self.first_turn = side;
        self
    }

    /// Check that the six starting positions are distinct.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = [false; Position::COUNT];
        for p in self.player_start.iter().chain(self.ai_start.iter()) {
            if std::mem::replace(&mut seen[p.index()], true) {
                return Err(ConfigError::OverlappingStart(*p));
            }
        }
        Ok(())
    }
}
