//! Game bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::controller::{NoPacer, RoundController};
use crate::core::{Player, RoundConfig};
use crate::present::{NullPresenter, RecordingPresenter, Shown};

use super::py_core::{PyAnimationFrame, PyRoundResult};

/// Python wrapper for RoundController.
///
/// Rounds never sleep; the caller gets the animation frames back and can
/// pace them however it likes.
#[pyclass(name = "DiceGame")]
pub struct PyDiceGame {
    controller: RoundController,
}

#[pymethods]
impl PyDiceGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed, or None to seed from the OS
    /// - roll_duration_ms: Total animation length
    /// - roll_interval_ms: Time between animation frames
    #[new]
    #[pyo3(signature = (seed = None, roll_duration_ms = 800, roll_interval_ms = 100))]
    fn new(seed: Option<u64>, roll_duration_ms: u64, roll_interval_ms: u64) -> PyResult<Self> {
        let config = RoundConfig {
            roll_duration_ms,
            roll_interval_ms,
            seed,
        };
        let controller =
            RoundController::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { controller })
    }

    /// Play a round.
    ///
    /// Returns the animation frames and the result.
    fn roll(&mut self) -> PyResult<(Vec<PyAnimationFrame>, PyRoundResult)> {
        let mut screen = RecordingPresenter::new();
        let result = self
            .controller
            .start_round(&mut screen, &mut NoPacer)
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))?
            .ok_or_else(|| PyRuntimeError::new_err("a round is already rolling"))?;

        let frames = screen
            .shown()
            .iter()
            .filter_map(|s| match s {
                Shown::Frame(frame) => Some(PyAnimationFrame(*frame)),
                _ => None,
            })
            .collect();

        Ok((frames, PyRoundResult(result)))
    }

    /// Zero all counters.
    fn reset(&mut self) -> PyResult<()> {
        self.controller
            .reset_game(&mut NullPresenter)
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))
    }

    /// Get a player's score (player is 1 or 2).
    fn score(&self, player: u8) -> PyResult<u32> {
        let player = match player {
            1 => Player::One,
            2 => Player::Two,
            other => return Err(PyValueError::new_err(format!("no player {}", other))),
        };
        Ok(self.controller.state().score(player))
    }

    #[getter]
    fn total_rounds(&self) -> u32 {
        self.controller.state().total_rounds
    }

    #[getter]
    fn total_draws(&self) -> u32 {
        self.controller.state().total_draws
    }

    #[getter]
    fn is_rolling(&self) -> bool {
        self.controller.is_rolling()
    }

    fn __repr__(&self) -> String {
        let state = self.controller.state();
        format!(
            "DiceGame(score={}-{}, rounds={}, draws={})",
            state.score(Player::One),
            state.score(Player::Two),
            state.total_rounds,
            state.total_draws
        )
    }
}
