//! Round rules.
//!
//! Defines how a pair of final faces becomes an `Outcome`. Counting the
//! outcome into the running totals lives on `GameState::apply`.

pub mod outcome;

pub use outcome::{Outcome, RoundResult};
