//! Python bindings for the dice-battle engine.
//!
//! # Quick Start
//!
//! ```python
//! import dice_battle as db
//!
//! game = db.DiceGame(seed=42)
//!
//! # Play a round (animation frames are returned, not slept through)
//! frames, result = game.roll()
//! print(result.headline, game.total_rounds)
//!
//! game.reset()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// dice_battle: a two-player dice battle with animated rounds.
#[pymodule]
fn dice_battle(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAnimationFrame>()?;
    m.add_class::<PyRoundResult>()?;
    m.add_class::<PyDiceGame>()?;

    Ok(())
}
