//! Game state: running scores, counters and the rolling flag.
//!
//! ## GameState
//!
//! - Per-player win counts
//! - Total rounds and total draws
//! - Current phase (`Idle` or `Rolling`)
//!
//! Every completed round adds exactly one to either a player's wins or the
//! draw count, and one to the round count, so
//! `total_rounds == wins(One) + wins(Two) + total_draws` always holds.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerScores};
use crate::rules::{Outcome, RoundResult};

/// Round lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a round to start.
    #[default]
    Idle,
    /// A round is animating; new rounds are ignored.
    Rolling,
}

/// Running game state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Rounds won per player.
    pub scores: PlayerScores,

    /// Completed rounds.
    pub total_rounds: u32,

    /// Completed rounds that ended in a draw.
    pub total_draws: u32,

    /// Whether a round is in flight.
    pub phase: Phase,
}

impl GameState {
    /// Create a fresh state: all counters zero, idle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a round is in flight.
    #[must_use]
    pub fn is_rolling(&self) -> bool {
        self.phase == Phase::Rolling
    }

    /// Rounds won by a player.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.scores[player]
    }

    /// Count a completed round.
    pub fn apply(&mut self, result: &RoundResult) {
        self.total_rounds += 1;
        match result.outcome {
            Outcome::Win(player) => self.scores[player] += 1,
            Outcome::Draw => self.total_draws += 1,
        }
    }

    /// Copy of this state with a completed round counted.
    #[must_use]
    pub fn with_result(&self, result: &RoundResult) -> Self {
        let mut next = *self;
        next.apply(result);
        next
    }

    /// Check the round accounting invariant.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.total_rounds == self.scores.total() + self.total_draws
    }

    /// Zero every counter and return to idle.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
