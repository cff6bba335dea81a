//! # dice-battle
//!
//! A two-player dice battle engine. Each round both players roll one
//! six-sided die; the higher face wins the round and equal faces are a draw.
//! The engine keeps running scores and sequences a short cosmetic roll
//! animation before each result is revealed.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The engine never draws. Frames, results and
//!    counters go to a `Presenter`; inputs arrive as logical `Trigger`s.
//!
//! 2. **Fail Closed**: A round either counts completely or not at all.
//!
//! 3. **Non-blocking Animation**: The roll animation is a lazy iterator.
//!    Callers choose whether and how long to wait between frames.
//!
//! ## Modules
//!
//! - `core`: Players, die faces, RNG, configuration, game state
//! - `rules`: Outcomes and round results
//! - `animation`: Roll animation frames
//! - `present`: Presenter trait and scoreboard
//! - `input`: Event to trigger mapping
//! - `controller`: Round sequencing
//! - `error`: Error types

pub mod core;
pub mod rules;
pub mod animation;
pub mod present;
pub mod input;
pub mod controller;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerScores, DieFace,
    DiceSource, GameRng, ScriptedDice,
    RoundConfig, GameState, Phase,
};

pub use crate::rules::{Outcome, RoundResult};

pub use crate::animation::{AnimationFrame, RollAnimation};

pub use crate::present::{
    DisplayLabel, NullPresenter, Presenter, RecordingPresenter, Scoreboard, Shown,
};

pub use crate::input::{InputEvent, InputMapper, KeyCode, SequenceTracker, Target, Trigger};

pub use crate::controller::{
    CountingPacer, NoPacer, Pacer, RoundController, RoundTicket, ThreadPacer,
};

pub use crate::error::{ConfigError, DiceError, PresentError, RoundError};
