//! Round and frame bindings for Python.

use pyo3::prelude::*;

use crate::animation::AnimationFrame;
use crate::rules::RoundResult;

/// Python wrapper for one animation frame.
#[pyclass(name = "AnimationFrame")]
#[derive(Clone, Debug)]
pub struct PyAnimationFrame(pub AnimationFrame);

#[pymethods]
impl PyAnimationFrame {
    #[getter]
    fn tick(&self) -> usize {
        self.0.tick
    }

    /// Faces shown as (player 1, player 2).
    #[getter]
    fn faces(&self) -> (u8, u8) {
        (self.0.player1.value(), self.0.player2.value())
    }

    /// Milliseconds from the start of the animation.
    #[getter]
    fn offset_ms(&self) -> u64 {
        self.0.offset.as_millis() as u64
    }

    fn __repr__(&self) -> String {
        format!(
            "AnimationFrame(tick={}, faces=({}, {}))",
            self.0.tick, self.0.player1, self.0.player2
        )
    }
}

/// Python wrapper for a resolved round.
#[pyclass(name = "RoundResult")]
#[derive(Clone, Debug)]
pub struct PyRoundResult(pub RoundResult);

#[pymethods]
impl PyRoundResult {
    /// Faces rolled as (player 1, player 2).
    #[getter]
    fn faces(&self) -> (u8, u8) {
        (self.0.player1.value(), self.0.player2.value())
    }

    /// Winning player number (1 or 2), or None on a draw.
    #[getter]
    fn winner(&self) -> Option<u8> {
        self.0.outcome.winner().map(|p| p.number())
    }

    #[getter]
    fn is_draw(&self) -> bool {
        self.0.outcome.is_draw()
    }

    #[getter]
    fn headline(&self) -> String {
        self.0.outcome.headline()
    }

    fn __repr__(&self) -> String {
        format!("RoundResult({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
