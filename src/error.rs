//! Error types.
//!
//! Apart from `ConfigError`, nothing in the default setup can fail:
//! `GameRng` never errors and the bundled presenters always succeed. The
//! other error types exist for custom dice sources and render surfaces that
//! can.

use thiserror::Error;

/// Unusable round timing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The animation is enabled but frames are zero milliseconds apart.
    #[error("roll interval must be positive when the animation is enabled")]
    ZeroInterval,

    /// The animation is enabled but too short for a single frame.
    #[error("roll duration {duration_ms}ms is shorter than one {interval_ms}ms frame")]
    DurationShorterThanInterval { duration_ms: u64, interval_ms: u64 },
}

/// Failure drawing a die face.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DiceError {
    /// The random source could not produce a value.
    #[error("random source unavailable: {0}")]
    Unavailable(String),

    /// The random source produced a value that is not a die face.
    #[error("die value {0} is outside 1..=6")]
    OutOfRange(u8),
}

/// Failure rendering to the presentation surface.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PresentError {
    #[error("render failed: {0}")]
    Render(String),
}

/// Failure completing a round.
///
/// Whenever a round fails, the game state is left as it was before the round
/// started and the controller is back in `Phase::Idle`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("dice roll failed: {0}")]
    Dice(#[from] DiceError),

    #[error("presenting result failed: {0}")]
    Present(#[from] PresentError),

    /// The game was reset while the round was rolling, or the ticket
    /// belongs to an older round.
    #[error("round cancelled by reset")]
    Cancelled,
}
