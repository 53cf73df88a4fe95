//! Seeded randomness for random arrangements.
//!
//! The engine draws random numbers in one place only: choosing free tiles
//! while building a random arrangement. That draw goes through the
//! [`TilePicker`] trait, so tests can script it and hosts can plug in any
//! source.
//!
//! ```
//! use rust_generals::core::{GameRng, TilePicker};
//!
//! let mut rng = GameRng::new(42);
//! let tile = rng.pick(0, 35, &[0, 1, 2]).unwrap();
//! assert!((3..=35).contains(&tile));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of tile ids for random arrangements.
///
/// Implementations return an id in the inclusive range `[from, to]` that is
/// not listed in `excluded`, or `None` when every id in the range is excluded.
pub trait TilePicker {
    fn pick(&mut self, from: usize, to: usize, excluded: &[usize]) -> Option<usize>;
}

/// ChaCha8 generator that remembers its seed, so its position can be
/// checkpointed and resumed.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw in `0..n`. `n` must be non-zero.
    pub fn below(&mut self, n: usize) -> usize {
        self.stream.gen_range(0..n)
    }

    /// Capture the current stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.stream.get_word_pos(),
        }
    }

    /// Resume a stream from a captured position.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.stream.set_word_pos(state.word_pos);
        rng
    }
}

impl TilePicker for GameRng {
    fn pick(&mut self, from: usize, to: usize, excluded: &[usize]) -> Option<usize> {
        if from > to {
            return None;
        }

        let mut skipped: Vec<usize> = excluded
            .iter()
            .copied()
            .filter(|id| (from..=to).contains(id))
            .collect();
        skipped.sort_unstable();
        skipped.dedup();

        let free = (to - from + 1) - skipped.len();
        if free == 0 {
            return None;
        }

        // Draw among the free slots, then step over each excluded id at or
        // below the candidate.
        let mut candidate = from + self.below(free);
        for id in skipped {
            if candidate < id {
                break;
            }
            candidate += 1;
        }
        Some(candidate)
    }
}

/// Checkpoint of a `GameRng`: its seed plus the ChaCha word position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}
