//! Roll animation frames.
//!
//! Before a round's result is revealed both dice tumble through a short run
//! of random faces. `RollAnimation` produces that run as a lazy, finite
//! iterator: it never sleeps and never touches game state, so whoever
//! consumes it decides the pacing (`Pacer` in the controller, a frame timer
//! in a UI, or nothing at all in tests).
//!
//! ```
//! use dice_battle::animation::RollAnimation;
//! use dice_battle::core::{GameRng, RoundConfig};
//!
//! let config = RoundConfig::default();
//! let frames: Vec<_> = RollAnimation::new(GameRng::new(1), &config).collect();
//!
//! assert_eq!(frames.len(), 8);
//! assert_eq!(frames[7].offset.as_millis(), 700);
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::{DieFace, GameRng, Player, RoundConfig};

/// One intermediate image pair shown while the dice roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationFrame {
    /// 0-based frame index.
    pub tick: usize,
    /// Face shown on player 1's die.
    pub player1: DieFace,
    /// Face shown on player 2's die.
    pub player2: DieFace,
    /// When this frame is due, measured from the start of the animation.
    pub offset: Duration,
}

impl AnimationFrame {
    /// The face shown on a player's die.
    #[must_use]
    pub fn face(&self, player: Player) -> DieFace {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }
}

/// Lazy, finite sequence of cosmetic roll frames.
///
/// Draws from its own RNG, so consuming or dropping frames has no effect on
/// the final result of the round.
#[derive(Clone, Debug)]
pub struct RollAnimation {
    rng: GameRng,
    cadence: Duration,
    frames: usize,
    next_tick: usize,
}

impl RollAnimation {
    /// Create the animation for one round.
    #[must_use]
    pub fn new(rng: GameRng, config: &RoundConfig) -> Self {
        Self {
            rng,
            cadence: config.roll_interval(),
            frames: config.frame_count(),
            next_tick: 0,
        }
    }

    /// Time between frames.
    #[must_use]
    pub fn cadence(&self) -> Duration {
        self.cadence
    }

    /// Total frame count, including frames already yielded.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames
    }

    /// Full length of the animation.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.cadence * self.frames as u32
    }

    /// Whether every frame has been yielded.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.next_tick >= self.frames
    }
}

impl Iterator for RollAnimation {
    type Item = AnimationFrame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }

        let tick = self.next_tick;
        self.next_tick += 1;
        let (player1, player2) = self.rng.roll_pair();

        Some(AnimationFrame {
            tick,
            player1,
            player2,
            offset: self.cadence * tick as u32,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.frames.saturating_sub(self.next_tick);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RollAnimation {}

impl std::iter::FusedIterator for RollAnimation {}
