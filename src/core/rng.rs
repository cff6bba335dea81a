//! Seedable random number generation with forking for cosmetic streams.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Forkable**: Each roll animation draws from its own branch, so the
//!   number of animation frames never shifts the final results
//!
//! ## Usage
//!
//! ```
//! use dice_battle::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut animation_rng = rng.fork();
//!
//! let face = rng.roll_face();
//! assert!((1..=6).contains(&face.value()));
//!
//! let mut rng2 = GameRng::new(42);
//! let _ = rng2.fork();
//! assert_eq!(rng2.roll_face(), face);
//! # let _ = animation_rng.roll_face();
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

use super::die::DieFace;
use crate::error::DiceError;

/// Source of die faces for final round draws.
///
/// `GameRng` is the standard implementation and never fails. Other sources
/// (hardware RNGs, scripted sequences in tests) may.
pub trait DiceSource {
    /// Draw one face uniformly from `1..=6`.
    fn roll(&mut self) -> Result<DieFace, DiceError>;
}

/// Seedable RNG with forking.
///
/// Uses ChaCha8 for speed while keeping high quality output.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create a new RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence and does
    /// not advance the parent stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
            fork_counter: 0,
        }
    }

    /// Draw one face uniformly from `1..=6`.
    pub fn roll_face(&mut self) -> DieFace {
        let value = self.inner.gen_range(1..=DieFace::SIDES);
        DieFace::new(value).unwrap_or(DieFace::MAX)
    }

    /// Draw a pair of independent faces.
    pub fn roll_pair(&mut self) -> (DieFace, DieFace) {
        let first = self.roll_face();
        (first, self.roll_face())
    }
}

impl DiceSource for GameRng {
    fn roll(&mut self) -> Result<DieFace, DiceError> {
        Ok(self.roll_face())
    }
}

/// Dice source that replays a fixed list of values.
///
/// Fails with `DiceError::Unavailable` once the list runs out and with
/// `DiceError::OutOfRange` for values that are not die faces.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    values: std::collections::VecDeque<u8>,
}

impl ScriptedDice {
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Append more values to replay.
    pub fn extend(&mut self, values: impl IntoIterator<Item = u8>) {
        self.values.extend(values);
    }

    /// Values not yet rolled.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> Result<DieFace, DiceError> {
        let value = self
            .values
            .pop_front()
            .ok_or_else(|| DiceError::Unavailable("script exhausted".to_string()))?;
        DieFace::try_from(value)
    }
}
