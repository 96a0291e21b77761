//! Python bindings for the GameCircl engine.
//!
//! # Quick Start
//!
//! ```python
//! import gamecircl_engine as gc
//!
//! game = gc.QuestionGame.never_have_i_ever(seed=42)
//! game.add_player("Ana")
//! game.add_player("Ben")
//! game.start_limited(2)
//!
//! while True:
//!     print(game.current_player().name, game.question())
//!     if game.next_player() == "finished":
//!         break
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// gamecircl_engine: turn rotation and prompts for GameCircl party games.
#[pymodule]
fn gamecircl_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core types
    m.add_class::<PyParticipant>()?;
    m.add_class::<PyProgress>()?;
    m.add_class::<PyParticipantResult>()?;

    // Games
    m.add_class::<PyBetBuddy>()?;
    m.add_class::<PyQuestionGame>()?;
    m.add_class::<PyTruthOrDare>()?;

    Ok(())
}
