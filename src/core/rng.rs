//! Injected randomness for the AI's fallback move.
//!
//! The AI never touches a global RNG. It receives a [`ShuffleSource`], so
//! callers pick the source:
//!
//! - [`GameRng`]: seeded ChaCha8, the default for real sessions
//! - any scripted implementation, for tests that need a fixed order
//!
//! ```
//! use circular_ttt::core::{GameRng, Position, ShuffleSource};
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//!
//! let mut xs = Position::ALL;
//! let mut ys = Position::ALL;
//! a.shuffle_positions(&mut xs);
//! b.shuffle_positions(&mut ys);
//!
//! // Same seed, same order
//! assert_eq!(xs, ys);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::position::Position;

/// Source of visiting orders for randomized move selection.
pub trait ShuffleSource {
    /// Permute `positions` in place.
    fn shuffle_positions(&mut self, positions: &mut [Position]);
}

/// Deterministic RNG for AI move selection.
///
/// Uses ChaCha8 for speed while keeping the sequence reproducible from
/// the seed alone.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl ShuffleSource for GameRng {
    fn shuffle_positions(&mut self, positions: &mut [Position]) {
        self.shuffle(positions);
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture and restore are O(1)
/// regardless of how many values have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Draw `n` successive shuffles of the full position list.
    fn orders(rng: &mut GameRng, n: usize) -> Vec<[Position; Position::COUNT]> {
        (0..n)
            .map(|_| {
                let mut positions = Position::ALL;
                rng.shuffle_positions(&mut positions);
                positions
            })
            .collect()
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        assert_eq!(orders(&mut rng1, 100), orders(&mut rng2, 100));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        assert_ne!(orders(&mut rng1, 10), orders(&mut rng2, 10));
    }

    #[test]
    fn test_shuffle_positions_is_permutation() {
        let mut rng = GameRng::new(42);
        let mut positions = Position::ALL;

        rng.shuffle_positions(&mut positions);

        let mut sorted = positions;
        sorted.sort_unstable();
        assert_eq!(sorted, Position::ALL);
    }

    #[test]
    fn test_shuffle_eventually_reorders() {
        let mut rng = GameRng::new(42);
        let reordered = (0..20).any(|_| {
            let mut positions = Position::ALL;
            rng.shuffle_positions(&mut positions);
            positions != Position::ALL
        });
        assert!(reordered);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);

        orders(&mut rng, 100);

        let state = rng.state();
        let expected = orders(&mut rng, 10);

        let mut restored = GameRng::from_state(&state);
        let actual = orders(&mut restored, 10);

        assert_eq!(expected, actual);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
