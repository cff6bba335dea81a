//! Core types: players, die faces, RNG, configuration, state.
//!
//! Everything here is independent of how a round is sequenced or shown.

pub mod player;
pub mod die;
pub mod rng;
pub mod config;
pub mod state;

pub use player::{Player, PlayerScores};
pub use die::DieFace;
pub use rng::{DiceSource, GameRng, ScriptedDice};
pub use config::RoundConfig;
pub use state::{GameState, Phase};
