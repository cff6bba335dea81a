//! Round configuration.
//!
//! The rules themselves are fixed (two players, one six-sided die each).
//! What can be configured is the pacing of the cosmetic roll animation and
//! the RNG seed.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ConfigError;

/// Roll animation and RNG settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Total length of the roll animation in milliseconds (default: 800).
    pub roll_duration_ms: u64,

    /// Time between animation frames in milliseconds (default: 100).
    pub roll_interval_ms: u64,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            roll_duration_ms: 800,
            roll_interval_ms: 100,
            seed: None,
        }
    }
}

impl RoundConfig {
    /// Set the total animation length.
    #[must_use]
    pub fn with_roll_duration(mut self, duration: Duration) -> Self {
        self.roll_duration_ms = duration.as_millis() as u64;
        self
    }

    /// Set the time between animation frames.
    #[must_use]
    pub fn with_roll_interval(mut self, interval: Duration) -> Self {
        self.roll_interval_ms = interval.as_millis() as u64;
        self
    }

    /// Set a fixed seed for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Disable the animation entirely (zero frames).
    #[must_use]
    pub fn without_animation(mut self) -> Self {
        self.roll_duration_ms = 0;
        self
    }

    /// Total animation length.
    #[must_use]
    pub fn roll_duration(&self) -> Duration {
        Duration::from_millis(self.roll_duration_ms)
    }

    /// Time between frames.
    #[must_use]
    pub fn roll_interval(&self) -> Duration {
        Duration::from_millis(self.roll_interval_ms)
    }

    /// Number of animation frames per round.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        if self.roll_interval_ms == 0 {
            0
        } else {
            (self.roll_duration_ms / self.roll_interval_ms) as usize
        }
    }

    /// Check the settings are usable.
    ///
    /// A zero interval is only allowed when the animation is disabled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.roll_duration_ms == 0 {
            return Ok(());
        }
        if self.roll_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.roll_duration_ms < self.roll_interval_ms {
            return Err(ConfigError::DurationShorterThanInterval {
                duration_ms: self.roll_duration_ms,
                interval_ms: self.roll_interval_ms,
            });
        }
        Ok(())
    }
}
